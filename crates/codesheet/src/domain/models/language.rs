use serde::Deserialize;
use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::Display;
use strum_macros::EnumIter;
use strum_macros::EnumString;
use strum_macros::EnumVariantNames;

#[cfg(test)]
#[path = "language_test.rs"]
mod tests;

/// Runtime a submitted program runs under. The string form is the identifier
/// the execution API expects in its path.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumVariantNames,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LanguageId {
    #[default]
    Nodejs,
    Python,
    Python3,
    Ruby,
    Php,
    Go,
}

impl LanguageId {
    pub fn parse(s: &str) -> Option<LanguageId> {
        return LanguageId::iter().find(|e| e.to_string() == s);
    }

    /// Syntax mode the editor needs for this language. Most languages share
    /// their identifier with the mode, a few reuse another language's mode.
    pub fn mode(&self) -> ModeId {
        let mode = match self {
            LanguageId::Nodejs => "javascript",
            LanguageId::Python3 => "python",
            other => return ModeId::new(&other.to_string()),
        };

        return ModeId::new(mode);
    }

    pub fn sample_code(&self) -> String {
        let lines: &[&str] = match self {
            LanguageId::Nodejs => &[
                r#"console.log("Hello World from Nodejs!")"#,
                r#"const args = process.argv.slice(2)"#,
                r#"console.log(args.length + " Args: [" + args.join(", ") + "]")"#,
            ],
            LanguageId::Python => &[
                r#"import sys"#,
                r#"print "Hello World from Python!""#,
                r#"args = sys.argv[1:]"#,
                r#"print str(len(args)) + " Args: [" + ", ".join(args) + "]""#,
            ],
            LanguageId::Python3 => &[
                r#"import sys"#,
                r#"print("Hello World from Python3!")"#,
                r#"args = sys.argv[1:]"#,
                r#"print(str(len(args)) + " Args: [" + ", ".join(args) + "]")"#,
            ],
            LanguageId::Ruby => &[
                r#"puts("Hello World from Ruby!")"#,
                r##"puts("#{ARGV.length} Args: [#{ARGV.join(", ")}]")"##,
            ],
            LanguageId::Php => &[
                r#"<?php"#,
                r#"  echo "Hello World from PHP!\n";"#,
                r#"  $args = array_slice($argv, 1);"#,
                r#"  echo count($args), " Args: [", implode(", ", $args), "]\n";"#,
                r#"?>"#,
            ],
            LanguageId::Go => &[
                r#"package main"#,
                r#"import "os""#,
                r#"import "fmt""#,
                r#"import "strings""#,
                r#"func main() {"#,
                r#"  fmt.Println("Hello World from Go!")"#,
                r#"  args := os.Args[1:]"#,
                r#"  fmt.Println(fmt.Sprintf("%v Args: [%v]", len(args), strings.Join(args, ", ")))"#,
                r#"}"#,
            ],
        };

        return lines.join("\n");
    }
}

/// Identifier of a syntax-highlighting mode consumed by the editor widget.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModeId(String);

impl ModeId {
    pub fn new(id: &str) -> ModeId {
        return ModeId(id.to_string());
    }

    pub fn as_str(&self) -> &str {
        return &self.0;
    }
}

impl std::fmt::Display for ModeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return f.write_str(&self.0);
    }
}
