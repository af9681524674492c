use pomopad_core::GRADIENT_PRESETS;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(&GRADIENT_PRESETS[..])?;
    println!("{json}");
    Ok(())
}
