use radix_link::{
    Converter, NumberSystem, config, convert, format_from_integer, from_decimal, to_decimal,
};

#[radix_link_macros::demo_main]
fn main() {
    let settings = config::load_config_or_default("radix-link");
    let converter = Converter::from(&settings);

    // decimal to hexadecimal and back
    println!("{}", from_decimal(215));
    println!("{}", to_decimal("D7")?);

    println!("{}", format_from_integer(215, &NumberSystem::BINARY));

    println!(
        "{}",
        convert("A1F", &NumberSystem::HEXADECIMAL, &NumberSystem::OCTAL)?
    );
    println!(
        "{}",
        convert("11010111", &NumberSystem::BINARY, &NumberSystem::HEXADECIMAL)?
    );
    println!(
        "{}",
        convert(11010111u64, &NumberSystem::BINARY, &NumberSystem::HEXADECIMAL)?
    );

    println!(
        "{} -> {}: {}",
        converter.source(),
        converter.target(),
        converter.convert("FF").unwrap_or_else(|e| e.to_string())
    );

    let invalid: [(&str, NumberSystem); 4] = [
        ("12", NumberSystem::BINARY),
        ("19", NumberSystem::OCTAL),
        ("1A", NumberSystem::DECIMAL),
        ("1G", NumberSystem::HEXADECIMAL),
    ];
    for (numeral, system) in invalid {
        let target = if system == NumberSystem::HEXADECIMAL {
            NumberSystem::BINARY
        } else {
            NumberSystem::HEXADECIMAL
        };
        match convert(numeral, &system, &target) {
            Ok(output) => println!("{}", output),
            Err(e) => tracing::error!(error = %e, "conversion failed"),
        }
    }

    Ok(())
}
