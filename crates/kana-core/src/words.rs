//! Word-list parsing.
//!
//! A word list is a sequence of paragraphs separated by blank lines. The first
//! non-blank line of a paragraph is the headword shown to the typist, the
//! second is its kana reading. Further lines are ignored.

use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub headword: String,
    pub kana: String,
}

/// A paragraph dropped for having fewer than two non-blank lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedParagraph {
    /// 1-based line number of the paragraph's first line.
    pub line: usize,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WordParseReport {
    pub words: Vec<Word>,
    pub skipped: Vec<SkippedParagraph>,
}

impl WordParseReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Split word-list text into words. Never fails.
pub fn parse_words(text: &str) -> WordParseReport {
    let mut report = WordParseReport::default();
    let mut start = 0;
    let mut paragraph: Vec<&str> = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            flush(&mut report, start, &mut paragraph);
            continue;
        }
        if paragraph.is_empty() {
            start = i + 1;
        }
        paragraph.push(trimmed);
    }
    flush(&mut report, start, &mut paragraph);

    debug!(
        words = report.words.len(),
        skipped = report.skipped.len(),
        "word list parsed"
    );
    report
}

fn flush(report: &mut WordParseReport, start: usize, paragraph: &mut Vec<&str>) {
    match paragraph.as_slice() {
        [] => {}
        [headword, kana, ..] => report.words.push(Word {
            headword: headword.to_string(),
            kana: kana.to_string(),
        }),
        [only] => report.skipped.push(SkippedParagraph {
            line: start,
            text: only.to_string(),
        }),
    }
    paragraph.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(headword: &str, kana: &str) -> Word {
        Word {
            headword: headword.into(),
            kana: kana.into(),
        }
    }

    #[test]
    fn parses_paragraphs() {
        let report = parse_words("漢字\nかんじ\n\n寿司\nすし\n");
        assert!(report.is_clean());
        assert_eq!(
            report.words,
            vec![word("漢字", "かんじ"), word("寿司", "すし")]
        );
    }

    #[test]
    fn trims_and_tolerates_extra_blank_lines() {
        let report = parse_words("\n\n  猫  \n\tねこ \r\n \n\n\n犬\nいぬ");
        assert_eq!(report.words, vec![word("猫", "ねこ"), word("犬", "いぬ")]);
    }

    #[test]
    fn extra_lines_are_ignored() {
        let report = parse_words("東京\nとうきょう\nTokyo\n");
        assert_eq!(report.words, vec![word("東京", "とうきょう")]);
        assert!(report.is_clean());
    }

    #[test]
    fn short_paragraph_is_skipped() {
        let report = parse_words("山\nやま\n\nひとり\n\n川\nかわ");
        assert_eq!(report.words, vec![word("山", "やま"), word("川", "かわ")]);
        assert_eq!(
            report.skipped,
            vec![SkippedParagraph {
                line: 4,
                text: "ひとり".into(),
            }]
        );
    }

    #[test]
    fn empty_text_has_no_words() {
        let report = parse_words("");
        assert!(report.words.is_empty());
        assert!(report.is_clean());
    }
}
