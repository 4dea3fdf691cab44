use serde_json::json;
use visuals_rs::DashboardConfig;
use visuals_rs::api::{PageInputs, render_page};
use visuals_rs::core::{LoadStatus, Loaded, StructuredDocument, TabularDataset};
use visuals_rs::interaction::{SessionState, WidgetInput};
use visuals_rs::render::{JsonRenderer, Renderer, TextRenderer};
use visuals_rs::view::{ChartId, ChartKind, PageView};

fn sample_view(widgets: &WidgetInput) -> PageView {
    let inputs = PageInputs {
        table: Loaded {
            value: TabularDataset::from_pairs([("A", "1"), ("A", "2"), ("B", "3")]),
            status: LoadStatus::Loaded,
            source_name: "data.csv".to_owned(),
        },
        document: Loaded {
            value: StructuredDocument::new(json!({
                "data": [{ "value": "5" }, { "value": "x" }, { "value": "7" }]
            })),
            status: LoadStatus::Loaded,
            source_name: "data.json".to_owned(),
        },
    };
    let mut session = SessionState::default();
    render_page(&inputs, &mut session, widgets, &DashboardConfig::default())
}

fn render_text(view: &PageView) -> String {
    let mut renderer = TextRenderer::new(Vec::new());
    renderer.render(view).expect("render");
    String::from_utf8(renderer.into_inner()).expect("utf8")
}

#[test]
fn text_output_contains_every_section() {
    let output = render_text(&sample_view(&WidgetInput::default().with_num_points(2)));

    assert!(output.starts_with("# Data Visualizations 📈\n"));
    assert!(output.contains("[ok] Loaded data.csv successfully!"));
    assert!(output.contains("[ok] Loaded data.json successfully!"));
    assert!(output.contains("Category | Value"));
    assert!(output.contains("(3 of 3 rows)"));
    assert!(output.contains("### Graph 1: Static"));
    assert!(output.contains("Select a Category: [A]  options: A, B"));
    assert!(output.contains("Select number of data points: 2 (range 1..=3)"));
}

#[test]
fn bar_chart_scales_to_largest_count() {
    let output = render_text(&sample_view(&WidgetInput::default()));
    let full_bar = "█".repeat(40);
    let half_bar = "█".repeat(20);

    assert!(output.contains(&format!("A | {full_bar} 2\n")));
    assert!(output.contains(&format!("B | {half_bar} 1\n")));
}

#[test]
fn line_chart_prints_gaps_as_null() {
    let output = render_text(&sample_view(&WidgetInput::default().with_num_points(2)));
    assert!(output.contains("value: ▅ \n"));
    assert!(output.contains("0 | 5\n1 | null\n"));
}

#[test]
fn json_renderer_writes_one_document_per_pass() {
    let view = sample_view(&WidgetInput::default());
    let mut renderer = JsonRenderer::new(Vec::new());
    renderer.render(&view).expect("first pass");
    renderer.render(&view).expect("second pass");

    let output = String::from_utf8(renderer.into_inner()).expect("utf8");
    let lines = output.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], lines[1]);

    let decoded: PageView = serde_json::from_str(lines[0]).expect("decode");
    assert_eq!(decoded, view);
}

#[test]
fn json_view_tags_elements_and_keeps_chart_kind() {
    let view = sample_view(&WidgetInput::default());
    let value = serde_json::to_value(&view).expect("serialize");
    let elements = value["elements"].as_array().expect("elements");
    let tags = elements
        .iter()
        .filter_map(|element| element["element"].as_str())
        .collect::<Vec<_>>();

    assert_eq!(tags.len(), elements.len());
    assert_eq!(tags.first(), Some(&"page_config"));
    assert_eq!(tags.iter().filter(|tag| **tag == "chart").count(), 3);
    assert!(tags.contains(&"select_box"));
    assert!(tags.contains(&"slider"));

    let chart_kinds = elements
        .iter()
        .filter(|element| element["element"] == "chart")
        .map(|element| element["kind"].as_str().expect("chart kind"))
        .collect::<Vec<_>>();
    assert_eq!(chart_kinds, ["bar", "line", "line"]);
}

#[test]
fn json_chart_element_decodes_back() {
    let text = r#"{"elements":[{"element":"chart","id":"category_counts","kind":"bar","series_name":"count","labels":["A"],"values":[2.0]}]}"#;
    let decoded: PageView = serde_json::from_str(text).expect("decode");
    let chart = decoded.chart(ChartId::CategoryCounts).expect("chart");

    assert_eq!(chart.kind, ChartKind::Bar);
    assert_eq!(chart.values, vec![Some(2.0)]);
}
