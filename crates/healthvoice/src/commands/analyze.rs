use healthvoice_core::{Analysis, Extractor};
use serde::Serialize;

use super::{note_text, to_pretty_json, Context};

#[derive(Serialize)]
struct AnalyzeOutput {
    analysis: Analysis,
    summary: String,
}

pub fn run(ctx: &Context, words: &[String]) -> anyhow::Result<()> {
    let text = note_text(words)?;
    let extractor = Extractor::from_config(&ctx.config);
    println!("{}", analyze(&extractor, &text)?);
    Ok(())
}

fn analyze(extractor: &Extractor, text: &str) -> anyhow::Result<String> {
    let analysis = extractor.analyze(text)?;
    let summary = healthvoice_core::summarize(&analysis);
    to_pretty_json(&AnalyzeOutput { analysis, summary })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_outputs_summary() {
        let out = analyze(&Extractor::default(), "I have a sore throat and slept 5 hours").unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            json["summary"],
            "Presenting symptoms: Pain, Sore Throat. Lifestyle context: Sleep: 5 hours."
        );
        assert_eq!(json["analysis"]["lifestyle"]["sleep"]["hours"], 5);
    }

    #[test]
    fn test_analyze_too_long() {
        let err = analyze(&Extractor::new(10), "this note is far too long").unwrap_err();
        assert!(err.to_string().contains("limit is 10"));
    }
}
