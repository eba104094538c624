use std::path::PathBuf;

use image_contents::element::element_model::ElementNode;
use image_contents::Locale;

pub fn locale(tag: &str) -> Locale {
    Locale::parse(tag).unwrap()
}

pub fn image_button(node_id: i64, view_name: &str) -> ElementNode {
    ElementNode::new(1, node_id)
        .with_view_id(format!("com.example.player:id/{}", view_name))
        .with_class_name("android.widget.ImageButton")
}

/// Write `content` to `name` in a shared test directory under the system temp dir.
pub fn temp_file(name: &str, content: &str) -> String {
    let dir: PathBuf = std::env::temp_dir().join("image_contents_test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}
