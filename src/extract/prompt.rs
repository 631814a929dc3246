//! Financial extraction prompt and the hand-written few-shot example.
//!
//! The prompt and example are explicit values returned by functions, not
//! process-wide state; the extractor passes them into the model call.

use super::ExtractionRecord;

/// Role and extraction rules shown to the model before the example and text.
const PROMPT_HEADER: &str = r#"Role: You are an agent that extracts financial information from text as it is.

Goal:
You will be provided with news or articles related to the finance of a company. Your task is to extract:
- Company Names
- Stock Tickers
- Financial Events (e.g., earnings reports, mergers, acquisitions)
- Dates of Events
- Relevant Financial Figures (e.g., revenue, profit, stock price changes)
- CEO Names
- Sentiment (positive, negative, neutral) regarding the financial events

Extract the following relationships:
- (Company) -> [ISSUES] -> (Ticker)
- (Company) -> [EXPERIENCED] -> (Financial Event)
- (Event) -> [HAPPENED_ON] -> (Date)
- (Event) -> [HAS_VALUE] -> (Financial Figure)
- (Company) -> [COMPETES_WITH] -> (Company)
- (Executive) -> [WORKS_FOR] -> (Company)"#;

/// One labeled example guiding the model: source text plus the expected
/// extraction records.
pub struct FewShotExample {
    pub text: &'static str,
    pub extractions: Vec<ExtractionRecord>,
}

/// Source text for the NVIDIA / Groq partnership example.
const EXAMPLE_TEXT: &str = "NVIDIA Corporation's NVDA stock climbed 1% on Friday, Dec. 26, after it \
announced a strategic licensing partnership with AI inference chipmaker Groq and the \
integration of key Groq leadership into Nvidia's teams. As traders closed out a \
holiday-shortened week, Nvidia's shares finished the session at around $190.53. \
Throughout 2025, NVDA, part of the Zacks Semiconductor - General industry, has \
delivered robust gains amid surging global demand for AI hardware and continued \
optimism about the company's long-term growth trajectory. Friday's uptick came as \
Nvidia detailed its non-exclusive licensing agreement with Groq, under which it will \
integrate Groq's inference technology into its portfolio and welcome Groq's founder \
and other senior personnel to help scale the licensed technology. While investors \
remained concerned about whether AI is actually a bubble, the stock's performance \
this year has outpaced many peers in the semiconductor sector. Year to date, NVDA's \
shares have risen about 42% compared with the Zacks sub-industry's growth of 38.6%. \
STMicroelectronics N.V. STM and Texas Instruments Incorporated TXN, two of its peers \
from the same industry, have moved 5.1% and -5.7%, respectively, in the same period.";

/// The hand-written example set (a single NVIDIA/Groq article).
pub fn example_documents() -> Vec<FewShotExample> {
    vec![FewShotExample {
        text: EXAMPLE_TEXT,
        extractions: vec![
            // Company names
            ExtractionRecord::new("company", "NVIDIA Corporation", &[("type", "corporation")]),
            ExtractionRecord::new("company", "Groq", &[("type", "licensor")]),
            ExtractionRecord::new("company", "STMicroelectronics N.V.", &[("type", "peer")]),
            ExtractionRecord::new("company", "Texas Instruments Incorporated", &[("type", "peer")]),
            // Stock tickers
            ExtractionRecord::new("ticker", "NVDA", &[("exchange", "NASDAQ")]),
            ExtractionRecord::new("ticker", "STM", &[("status", "Hold")]),
            ExtractionRecord::new("ticker", "TXN", &[("status", "Hold")]),
            // Financial events
            ExtractionRecord::new(
                "event",
                "strategic licensing partnership",
                &[("type", "licensing_deal")],
            ),
            ExtractionRecord::new(
                "event",
                "integration of key Groq leadership",
                &[("type", "talent_acquisition")],
            ),
            ExtractionRecord::new(
                "event",
                "non-exclusive licensing agreement",
                &[("type", "contract_detail")],
            ),
            // Dates
            ExtractionRecord::new("timeline", "Friday, Dec. 26", &[("date_type", "event_date")]),
            ExtractionRecord::new("timeline", "2025", &[("date_type", "fiscal_year")]),
            ExtractionRecord::new(
                "timeline",
                "Year to date",
                &[("date_type", "performance_period")],
            ),
            // Financial figures
            ExtractionRecord::new("financial_figure", "climbed 1%", &[("metric", "daily_gain")]),
            ExtractionRecord::new("financial_figure", "$190.53", &[("metric", "closing_price")]),
            ExtractionRecord::new(
                "financial_figure",
                "risen about 42%",
                &[("metric", "YTD_gain")],
            ),
            ExtractionRecord::new(
                "financial_figure",
                "-5.7%",
                &[("metric", "peer_performance"), ("company", "TXN")],
            ),
            // Leadership
            ExtractionRecord::new("executive", "Groq's founder", &[("role", "joining_leadership")]),
            // Sentiment
            ExtractionRecord::new("sentiment", "robust gains", &[("score", "positive")]),
            ExtractionRecord::new("sentiment", "continued optimism", &[("score", "positive")]),
            ExtractionRecord::new(
                "sentiment",
                "concerned about whether AI is actually a bubble",
                &[("score", "neutral_cautionary")],
            ),
            // Relationships (the knowledge graph edges)
            ExtractionRecord::new("relationship", "NVIDIA Corporation's NVDA stock", &[
                ("subject", "NVIDIA Corporation"),
                ("predicate", "ISSUES"),
                ("object", "NVDA"),
            ]),
            ExtractionRecord::new(
                "relationship",
                "strategic licensing partnership with AI inference chipmaker Groq",
                &[
                    ("subject", "NVIDIA Corporation"),
                    ("predicate", "PARTNERS_WITH"),
                    ("object", "Groq"),
                ],
            ),
            ExtractionRecord::new(
                "relationship",
                "integration of key Groq leadership into Nvidia's teams",
                &[
                    ("subject", "Groq"),
                    ("predicate", "PROVIDES_TALENT_TO"),
                    ("object", "NVIDIA Corporation"),
                ],
            ),
            ExtractionRecord::new(
                "relationship",
                "Nvidia's shares finished the session at around $190.53",
                &[
                    ("subject", "NVDA"),
                    ("predicate", "HAS_PRICE"),
                    ("object", "$190.53"),
                ],
            ),
            ExtractionRecord::new("relationship", "STMicroelectronics N.V. STM", &[
                ("subject", "STMicroelectronics N.V."),
                ("predicate", "ISSUES"),
                ("object", "STM"),
            ]),
        ],
    }]
}

/// Build the full extraction prompt for one article.
pub fn build_extraction_prompt(text: &str) -> String {
    let examples = example_documents();
    let example = &examples[0];
    // serde_json cannot fail on these literal records
    let example_json = serde_json::to_string_pretty(&example.extractions)
        .unwrap_or_else(|_| "[]".to_string());

    format!(
        r#"{header}

OUTPUT FORMAT:
Output ONLY a JSON object with a single "extractions" key holding an array of records:
{{"extractions": [{{"extraction_class": "...", "extraction_text": "...", "attributes": {{"...": "..."}}}}]}}

RULES:
- extraction_class must be one of: company, ticker, event, timeline, financial_figure, executive, sentiment, relationship
- extraction_text must be a literal span copied from the text
- relationship records must carry exactly the attributes "subject", "predicate", "object"
- Output ONLY the JSON object, no markdown, no explanations

EXAMPLE TEXT:
{example_text}

EXAMPLE OUTPUT:
{{"extractions": {example_json}}}

TEXT:
{text}

JSON OUTPUT:"#,
        header = PROMPT_HEADER,
        example_text = example.text,
        example_json = example_json,
        text = text,
    )
}

/// Correction prompt used when the model emits unparseable JSON.
pub fn build_retry_prompt(invalid_json: &str) -> String {
    format!(
        r#"The following JSON is invalid:

{}

Fix this JSON. Output only valid JSON with no markdown formatting, no code blocks, no explanations. Just the raw JSON object."#,
        invalid_json
    )
}
