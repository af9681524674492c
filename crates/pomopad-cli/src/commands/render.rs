use clap::Args;
use pomopad_core::{ProgressRenderer, SessionKind};

#[derive(Args)]
pub struct RenderArgs {
    /// Elapsed share of the session, 0.0 to 1.0
    #[arg(long)]
    fraction: f64,
    /// Session kind: work or break
    #[arg(long, default_value = "work")]
    kind: SessionKind,
    /// Remaining seconds shown in the middle of the dial
    #[arg(long, default_value = "0")]
    remaining: u64,
    /// Dial radius in pixels
    #[arg(long)]
    radius: Option<f64>,
}

pub fn run(args: RenderArgs) -> Result<(), Box<dyn std::error::Error>> {
    let renderer = match args.radius {
        Some(r) if !(r.is_finite() && r > 0.0) => {
            return Err(format!("radius must be a positive number, got {r}").into());
        }
        Some(r) => ProgressRenderer::new(r),
        None => ProgressRenderer::default(),
    };
    let view = renderer.render(args.fraction, args.kind, args.remaining);
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
