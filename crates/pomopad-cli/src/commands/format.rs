use pomopad_core::format_time;

pub fn run(seconds: u64) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", format_time(seconds));
    Ok(())
}
