//! Sketch: the same cube scene shaded by the animated noise-displacement
//! strategy.

use cubeflow::{
    context::Context,
    harness::{self, Sketch, SketchConfig},
    scene::{CubeScene, SceneOptions},
    shading::Displaced,
};

fn main() -> anyhow::Result<()> {
    harness::run(
        SketchConfig::default(),
        Box::new(|ctx: &Context| {
            let scene = CubeScene::new(ctx, SceneOptions::default(), Box::new(Displaced))?;
            Ok(Box::new(scene) as Box<dyn Sketch>)
        }),
    )
}
