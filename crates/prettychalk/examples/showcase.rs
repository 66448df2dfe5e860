use prettychalk::chalk;
use prettychalk::error::ColorFormatError;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ColorFormatError> {
    // Run with RUST_LOG=prettychalk=trace to see level detection and downsampling.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Combine styled and plain text
    println!("{} World{}", chalk().blue().paint("Hello"), chalk().red().paint("!"));

    // Chain styles
    println!("{}", chalk().blue().bg_red().bold().paint("Hello world!"));

    // Render several values at once
    println!(
        "{}",
        chalk().blue().render(["Hello", "World!", "Foo", "bar", "biz", "baz"])
    );

    // Nest styles
    let world = format!("{}!", chalk().underline().bg_blue().paint("world"));
    println!("{}", chalk().red().render(["Hello", world.as_str()]));

    // Nest styles of the same kind
    let substring = chalk().blue().underline().bold().paint("with a blue substring");
    println!(
        "{}",
        chalk().green().render_with(
            ["I am a green line ", substring.as_str(), " that becomes green again!"],
            ""
        )
    );

    // Format arguments
    println!(
        "\nCPU: {}\nRAM: {}\nDISK: {}\n",
        chalk().red().paint("90%"),
        chalk().green().paint("40%"),
        chalk().yellow().paint("70%")
    );

    // True colors are downsampled for terminals without support
    println!("{}", chalk().rgb(123, 45, 67).underline().paint("Underlined reddish color"));
    println!("{}", chalk().hex("#DEADED")?.bold().paint("Bold gray!"));

    // Define themes
    let error = chalk().bold().red();
    let warning = chalk().hex("#FFA500")?;

    println!("{}", error.paint("Error!"));
    println!("{}", warning.paint("Warning!"));

    // Decorations disappear without colors
    println!("{}", chalk().visible().cyan().paint("* shown only in color *"));

    Ok(())
}
