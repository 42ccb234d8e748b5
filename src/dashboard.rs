//! Dashboard layout with a static pricing chart.
//!
//! The layout is a small component tree (`Div`, `H1`, `P`, `Graph`) that
//! serializes to the `{type, namespace, props}` document a browser-side
//! chart renderer consumes. It is served as JSON from the layout endpoint
//! and rendered through `dashboard.html` at the dashboard mount.

use axum::{extract::State, response::Response, Json};
use minijinja::context;
use serde::Serialize;

use crate::state::AppState;

/// Mount path of the dashboard.
pub const BASE_PATH: &str = "/dashboard/";

pub const GRAPH_ID: &str = "uber_pricing_graph";
pub const HEADING: &str = "Check it out! This app has Flask AND Dash!";
pub const BLURB: &str = "Adding some cool graph here soon:";
pub const CHART_TITLE: &str = "Uber Pricing in Brooklyn and Manhattan";

/// One plotted series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Sample fare data shown on the dashboard.
pub fn sample_data() -> Vec<Series> {
    vec![
        Series {
            name: "Brooklyn".to_string(),
            x: vec![0.86, 1.5, 2.2, 2.6, 2.7, 3.0, 3.67],
            y: vec![6.40, 8.34, 9.46, 11.13, 12.55, 18.68],
            kind: "line".to_string(),
        },
        Series {
            name: "Manhattan".to_string(),
            x: vec![0.93, 1.33, 2.6, 2.4, 2.94, 3.34, 4.11],
            y: vec![9.34, 10.09, 13.24, 16.53, 15.64, 25.65],
            kind: "line".to_string(),
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Series>,
    pub layout: FigureLayout,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FigureLayout {
    pub title: String,
}

/// A node of the layout tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Component {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub namespace: &'static str,
    pub props: Props,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Props {
    Graph { id: String, figure: Figure },
    Children { children: Children },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Children {
    Text(String),
    Nodes(Vec<Component>),
}

const HTML_NS: &str = "dash_html_components";
const CORE_NS: &str = "dash_core_components";

impl Component {
    pub fn div(children: Vec<Component>) -> Self {
        Self::element("Div", Children::Nodes(children))
    }

    pub fn h1(text: &str) -> Self {
        Self::element("H1", Children::Text(text.to_string()))
    }

    pub fn p(text: &str) -> Self {
        Self::element("P", Children::Text(text.to_string()))
    }

    pub fn graph(id: &str, figure: Figure) -> Self {
        Self {
            kind: "Graph",
            namespace: CORE_NS,
            props: Props::Graph {
                id: id.to_string(),
                figure,
            },
        }
    }

    fn element(kind: &'static str, children: Children) -> Self {
        Self {
            kind,
            namespace: HTML_NS,
            props: Props::Children { children },
        }
    }
}

/// Builds the dashboard layout around the given chart series.
pub fn layout(chart: &[Series]) -> Component {
    Component::div(vec![
        Component::h1(HEADING),
        Component::p(BLURB),
        Component::graph(
            GRAPH_ID,
            Figure {
                data: chart.to_vec(),
                layout: FigureLayout {
                    title: CHART_TITLE.to_string(),
                },
            },
        ),
    ])
}

/// `GET /dashboard/_dash-layout`, and `GET /go-to-dashboard`
pub async fn serve_layout(State(state): State<AppState>) -> Json<Component> {
    Json(layout(&state.chart))
}

/// `GET /dashboard/`
pub async fn index(State(state): State<AppState>) -> Response {
    let page = state
        .templates
        .page("dashboard.html", context! { layout => layout(&state.chart) });
    state.templates.respond(page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_serializes_children_in_order() {
        let json = serde_json::to_value(layout(&sample_data())).unwrap();
        let children = &json["props"]["children"];

        assert_eq!(json["type"], "Div");
        assert_eq!(children[0]["type"], "H1");
        assert_eq!(children[0]["props"]["children"], HEADING);
        assert_eq!(children[1]["type"], "P");
        assert_eq!(children[1]["props"]["children"], BLURB);
        assert_eq!(children[2]["type"], "Graph");
        assert_eq!(children[2]["namespace"], "dash_core_components");
        assert_eq!(children[2]["props"]["id"], GRAPH_ID);
        assert_eq!(
            children[2]["props"]["figure"]["layout"]["title"],
            CHART_TITLE
        );
    }

    #[test]
    fn series_type_field_is_renamed() {
        let json = serde_json::to_value(&sample_data()[0]).unwrap();
        assert_eq!(json["type"], "line");
        assert_eq!(json["name"], "Brooklyn");
        assert_eq!(json["x"].as_array().unwrap().len(), 7);
        assert_eq!(json["y"].as_array().unwrap().len(), 6);
    }

    #[test]
    fn page_embeds_figure_and_text() {
        let templates = crate::templates::Templates::new().unwrap();
        let html = templates
            .render("dashboard.html", context! { layout => layout(&sample_data()) })
            .unwrap();

        assert!(html.contains("<h1>Check it out! This app has Flask AND Dash!</h1>"));
        assert!(html.contains("<p>Adding some cool graph here soon:</p>"));
        assert!(html.contains(r#"<div id="uber_pricing_graph" class="graph">"#));
        assert!(html.contains(r#""name":"Manhattan""#));
    }
}
