//! The `iaa init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("iaa.toml").exists() {
        println!("iaa.toml already exists, skipping.");
    } else {
        std::fs::write("iaa.toml", SAMPLE_CONFIG)?;
        println!("Created iaa.toml");
    }

    println!("\nNext steps:");
    println!("  1. Point [annotators] at the two scored workbooks");
    println!("  2. Run: iaa inspect --workbook eval/first.xlsx");
    println!("  3. Run: iaa agreement");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# iaa configuration

[annotators]
first_path = "eval/first.xlsx"
second_path = "eval/second.xlsx"
first_label = "A"
second_label = "B"

# Team sheet layout. Columns are zero-based (A = 0).
[layout]
sheet_prefix = "Team"
header_rows = 1
qid_column = 0
pass_column = 3
fail_column = 4
score_column = 5
pass_marker = "Pass (1)"
fail_marker = "Fail (0)"
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_config_parses_to_defaults() {
        let config = iaa_core::config::parse_config(SAMPLE_CONFIG).unwrap();
        assert_eq!(config, iaa_core::config::IaaConfig::default());
    }
}
