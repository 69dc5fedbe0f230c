fn main() {
    // Validate embedded data files at compile time.
    validate_toml(
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
    );
    validate_rules(
        "src/rules/default_rules.txt",
        include_str!("src/rules/default_rules.txt"),
    );
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}

fn validate_rules(path: &str, content: &str) {
    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let tokens = trimmed.split_whitespace().count();
        if !(2..=3).contains(&tokens) {
            panic!("{path}:{}: expected `<romaji> <kana> [<trigger>]`", i + 1);
        }
    }
}
