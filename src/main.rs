use obj_scene::{config::SceneConfig, flow};

fn main() -> anyhow::Result<()> {
    flow::run(SceneConfig::default())
}
