use settle::{DepthLimit, EndListener, StyleNode, add_end_event_listener, detect_animation_end_time};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let s = include_str!("../tests/data/nested_menu.json");
    let tree = StyleNode::from_json_str(s)?;

    for depth in [0u32, 1, 2, 3] {
        let ms = detect_animation_end_time(&tree, DepthLimit::Levels(depth));
        println!("depth {depth}: {ms} ms");
    }

    let listener = EndListener::new(|| {
        let mut m = serde_json::Map::new();
        m.insert("menu".to_owned(), serde_json::Value::from("open"));
        m
    });
    let done = add_end_event_listener(&tree, Some(listener), DepthLimit::Unbounded)?.await?;
    println!("settled: {}", serde_json::to_string(&done)?);

    Ok(())
}
