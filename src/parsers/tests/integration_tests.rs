use crate::analysis::FALLBACK_TITLE;
use crate::fetchers::{PageSource, SourceError};
use crate::{Analysis, AnalysisError, AnalyzerConfig, Derived, PriceStats, analyze_markup};
use async_trait::async_trait;
use rust_decimal::Decimal;
use url::Url;

const SCENARIO_PAGE: &str = r#"
<html><body><ul class="srp-results">
  <li class="s-item"><div class="s-item__wrapper">
    <div class="s-item__title"><span role="heading">Anime DVD Box Set</span></div>
    <span class="s-item__price">$9.99</span>
  </div></li>
  <li class="s-item"><div class="s-item__wrapper">
    <div class="s-item__title"><span role="heading">Shop on eBay</span></div>
  </div></li>
  <li class="s-item"><div class="s-item__wrapper">
    <div class="s-item__title"><span role="heading">Rare Anime Collection</span></div>
  </div></li>
</ul></body></html>
"#;

/// Serves the same markup for every request
struct StaticSource(String);

#[async_trait]
impl PageSource for StaticSource {
    async fn get(&self, _url: &Url) -> Result<String, SourceError> {
        Ok(self.0.clone())
    }
}

/// Fails every request
struct DownSource;

#[async_trait]
impl PageSource for DownSource {
    async fn get(&self, _url: &Url) -> Result<String, SourceError> {
        Err(SourceError::Transport("connection refused".to_string()))
    }
}

fn no_delay() -> AnalyzerConfig {
    AnalyzerConfig {
        retry_base_delay_secs: 0.0,
        retry_jitter_secs: [0.0, 0.0],
        ..AnalyzerConfig::default()
    }
}

#[cfg(test)]
mod markup_tests {
    use super::*;

    #[test]
    fn test_scenario_page() {
        let report = analyze_markup(SCENARIO_PAGE, &AnalyzerConfig::default()).unwrap();

        assert_eq!(report.titles, vec!["Anime DVD Box Set", "Rare Anime Collection"]);
        assert_eq!(report.prices, vec![Some(Decimal::new(999, 2)), None]);
        assert_eq!(report.titles.len(), report.prices.len());

        let keywords: Vec<(&str, usize)> = report
            .keywords
            .value()
            .iter()
            .map(|(k, v)| (k.as_str(), *v))
            .collect();
        assert_eq!(
            keywords,
            vec![("anime", 2), ("dvd", 1), ("rare", 1), ("collection", 1)]
        );

        assert_eq!(
            report.suggested_title,
            Derived::Computed("Anime, Dvd, Rare, Collection - New".to_string())
        );

        let stats = report.price_stats.value();
        assert_eq!(stats.average, Decimal::new(999, 2));
        assert_eq!(stats.median, Decimal::new(999, 2));
        assert_eq!(stats.min, Decimal::new(999, 2));
        assert_eq!(stats.max, Decimal::new(999, 2));
    }

    #[test]
    fn test_same_markup_same_report() {
        let config = AnalyzerConfig::default();
        let first = analyze_markup(SCENARIO_PAGE, &config).unwrap();
        let second = analyze_markup(SCENARIO_PAGE, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_page_degrades() {
        let report = analyze_markup("<html></html>", &AnalyzerConfig::default()).unwrap();
        assert!(report.titles.is_empty());
        assert!(report.keywords.value().is_empty());
        assert_eq!(
            report.suggested_title,
            Derived::Defaulted(FALLBACK_TITLE.to_string())
        );
        assert_eq!(report.price_stats, Derived::Defaulted(PriceStats::zero()));
    }

    #[test]
    fn test_report_serializes() {
        let report = analyze_markup(SCENARIO_PAGE, &AnalyzerConfig::default()).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["titles"][1], "Rare Anime Collection");
        assert!(json["prices"][1].is_null());
        assert_eq!(json["keywords"]["status"], "computed");
        assert_eq!(json["keywords"]["value"]["anime"], 2);
    }
}

#[cfg(test)]
mod pipeline_tests {
    use super::*;

    #[tokio::test]
    async fn test_run_with_source() {
        let report = Analysis::new("https://www.ebay.com/sch/i.html?_nkw=anime+dvd")
            .with_config(no_delay())
            .run_with(StaticSource(SCENARIO_PAGE.to_string()))
            .await
            .unwrap();
        assert_eq!(
            report.url.as_deref(),
            Some("https://www.ebay.com/sch/i.html?_nkw=anime+dvd&_ipg=60")
        );
        assert_eq!(report.item_count(), 2);
    }

    #[tokio::test]
    async fn test_invalid_url_rejected() {
        let result = Analysis::new("https://www.amazon.com/s?k=anime")
            .run_with(StaticSource(SCENARIO_PAGE.to_string()))
            .await;
        assert!(matches!(result, Err(AnalysisError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_no_results() {
        let result = Analysis::new("https://www.ebay.com/sch/i.html?_nkw=zzzz")
            .with_config(no_delay())
            .run_with(StaticSource("<html><body></body></html>".to_string()))
            .await;
        assert!(matches!(result, Err(AnalysisError::NoResults)));
    }

    #[tokio::test]
    async fn test_fetch_failure_surfaces() {
        let result = Analysis::new("https://www.ebay.com/sch/i.html?_nkw=anime")
            .with_config(no_delay())
            .with_max_retries(2)
            .run_with(DownSource)
            .await;
        match result {
            Err(AnalysisError::Fetch(e)) => {
                assert!(e.to_string().contains("after 2 attempts"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
