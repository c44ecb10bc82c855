// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    // Using a raw string literal for the multi-line banner
    let banner = r#"
                 _ _ _  __ _
 ____   ___   __| | (_)/ _| |_
|  _ \ / _ \ / _` | | | |_| __|
| |_) | (_) | (_| | | |  _| |_
| .__/ \___/ \__,_|_|_|_|  \__|
|_|

    podlift Example Service - v2
"#;
    println!("{}", banner);
}
