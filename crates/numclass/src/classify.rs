use crate::fact::{FactClient, FactConfig, DEFAULT_FACT_TIMEOUT_MS};
use crate::prelude::{println, *};
use colored::Colorize;
use numclass_core::classify::{classify, ClassificationResult};
use numclass_core::fact::DEFAULT_FACT_API_URL;
use numclass_core::input::parse_number;
use std::time::Duration;

#[derive(Debug, clap::Parser)]
#[command(name = "classify")]
#[command(about = "Classify a single number and print the result")]
pub struct App {
    /// Integer to classify (e.g., "371" or "-153")
    #[arg(allow_hyphen_values = true)]
    pub number: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Skip the fun-fact lookup
    #[arg(long)]
    pub no_fact: bool,

    /// Base URL of the math-facts provider
    #[arg(long, env = "NUMCLASS_FACT_API_URL", default_value = DEFAULT_FACT_API_URL)]
    pub fact_api_url: String,

    /// Timeout for the fun-fact lookup, in milliseconds
    #[arg(long, env = "NUMCLASS_FACT_TIMEOUT_MS", default_value_t = DEFAULT_FACT_TIMEOUT_MS)]
    pub fact_timeout_ms: u64,
}

/// Classify `raw` and, when a client is given, attach its fun fact.
pub async fn classify_data(raw: &str, fact: Option<&FactClient>) -> Result<ClassificationResult> {
    let n = parse_number(Some(raw))?;

    let classification = tokio::task::spawn_blocking(move || classify(n))
        .await
        .map_err(|e| Error::Compute(e.to_string()))?;

    let fun_fact = match fact {
        Some(client) => client.lookup(n).await.into_fun_fact(),
        None => String::new(),
    };

    Ok(classification.with_fun_fact(fun_fact))
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let client = (!app.no_fact).then(|| {
        FactClient::new(FactConfig {
            base_url: app.fact_api_url.clone(),
            timeout: Duration::from_millis(app.fact_timeout_ms),
        })
    });

    if global.verbose {
        if let Some(client) = &client {
            println!("Fact provider: {}", client.config().base_url);
            println!();
        }
    }

    let result = classify_data(&app.number, client.as_ref())
        .await
        .with_context(|| f!("Failed to classify {:?}", app.number))?;

    if app.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("\n{}\n", result.number.to_string().bold());

    let properties = result
        .properties
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    let mut table = new_table();
    table.add_row(prettytable::row!["Prime", yes_no(result.is_prime)]);
    table.add_row(prettytable::row!["Perfect", yes_no(result.is_perfect)]);
    table.add_row(prettytable::row!["Properties", properties]);
    table.add_row(prettytable::row!["Digit sum", result.digit_sum]);
    table.printstd();

    if !result.fun_fact.is_empty() {
        println!("\n{}", result.fun_fact.italic());
    }

    Ok(())
}

fn yes_no(flag: bool) -> String {
    if flag {
        "yes".green().to_string()
    } else {
        "no".red().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use numclass_core::classify::Property;

    #[tokio::test]
    async fn test_classify_data_without_fact() {
        let result = classify_data("6", None).await.unwrap();

        assert!(result.is_perfect);
        assert!(!result.is_prime);
        assert_eq!(result.properties, vec![Property::Armstrong, Property::Even]);
        assert_eq!(result.digit_sum, 6);
        assert_eq!(result.fun_fact, "");
    }

    #[tokio::test]
    async fn test_classify_data_with_fact() {
        let provider = MockServer::start_async().await;
        provider
            .mock_async(|when, then| {
                when.method(GET).path("/2/math");
                then.status(200)
                    .json_body(serde_json::json!({"text": "2 is the only even prime."}));
            })
            .await;

        let client = FactClient::new(FactConfig {
            base_url: provider.base_url(),
            timeout: Duration::from_secs(1),
        });

        let result = classify_data("2", Some(&client)).await.unwrap();

        assert!(result.is_prime);
        assert_eq!(result.fun_fact, "2 is the only even prime.");
    }

    #[tokio::test]
    async fn test_classify_data_rejects_garbage() {
        let err = classify_data("twelve", None).await.unwrap_err();

        assert!(err.to_string().contains("twelve"));
    }
}
