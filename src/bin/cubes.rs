//! Sketch: 40 randomly placed cubes with static lit flat-color materials.

use cubeflow::{
    context::Context,
    harness::{self, Sketch, SketchConfig},
    scene::{CubeScene, SceneOptions},
    shading::FlatLit,
};

fn main() -> anyhow::Result<()> {
    harness::run(
        SketchConfig::default(),
        Box::new(|ctx: &Context| {
            let scene = CubeScene::new(ctx, SceneOptions::default(), Box::new(FlatLit))?;
            Ok(Box::new(scene) as Box<dyn Sketch>)
        }),
    )
}
