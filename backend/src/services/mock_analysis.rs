//! Mock light-curve analysis.
//!
//! Stands in for the transit classifier while the ML service is offline. The
//! verdict is random (60% positive), and the response mirrors the shape the
//! real pipeline returns so the results card can be exercised end to end.

use rand::Rng;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Probability threshold: a draw above this is a detection.
const DETECTION_THRESHOLD: f64 = 0.4;
/// Draw above which an uploaded point is flagged as a transit candidate.
const HIGHLIGHT_THRESHOLD: f64 = 0.85;
const MIN_CONFIDENCE: u32 = 70;
const CONFIDENCE_SPAN: u32 = 30;

const SYNTHETIC_POINTS: usize = 100;
const SYNTHETIC_START_BJD: f64 = 2_454_833.0;
const SYNTHETIC_CADENCE_DAYS: f64 = 0.1;
const SYNTHETIC_NOISE: f64 = 0.01;
const SYNTHETIC_TRANSIT_DEPTH: f64 = -0.02;

const POSITIVE_EXPLANATION: &str = "The flux pattern matches known exoplanet signatures: periodic transit dips with consistent depth and duration. The detected signal shows characteristics typical of a planetary companion with a radius of approximately 1.2 Earth radii orbiting in the stellar habitable zone.";
const NEGATIVE_EXPLANATION: &str = "The flux variations observed are inconsistent with planetary transit signatures. The data shows irregular patterns more characteristic of stellar activity, instrumental noise, or other astrophysical phenomena. No statistically significant exoplanet signal was detected.";

/// How the data was provided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    Upload,
    Manual,
}

/// Stellar and observation metadata from the manual input form.
///
/// Values are kept as strings, as typed by the user. Numbers are accepted
/// and stringified; blank or non-scalar values count as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StarMetadata {
    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,
    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub ra_obj: Option<String>,
    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub dec_obj: Option<String>,
    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub keptmag_tmag: Option<String>,
    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub teff: Option<String>,
    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub logg: Option<String>,
    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub feh: Option<String>,
    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub radius: Option<String>,
    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub mass: Option<String>,
    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub sector_quarter: Option<String>,
    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub camera: Option<String>,
    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub ccd: Option<String>,
}

impl StarMetadata {
    pub fn is_empty(&self) -> bool {
        self == &StarMetadata::default()
    }
}

/// One light-curve sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FluxPoint {
    pub time: f64,
    pub flux: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flux_err: Option<f64>,
}

/// Body of an analysis request.
///
/// Any JSON object is accepted. The upload flow sends `mode`, `metadata` and
/// `timeseries`; the manual form posts its fields flat at the top level,
/// which land in `form`. Malformed optional parts are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub mode: Option<InputMode>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub metadata: Option<StarMetadata>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub timeseries: Option<Vec<FluxPoint>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub raw_file_preview: Option<Vec<serde_json::Value>>,
    #[serde(flatten)]
    pub form: StarMetadata,
}

impl AnalysisRequest {
    /// Nested `metadata` when present, otherwise the flat form fields.
    pub fn star_metadata(&self) -> Option<&StarMetadata> {
        self.metadata
            .as_ref()
            .or(Some(&self.form))
            .filter(|m| !m.is_empty())
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => return Ok(None),
    };
    let trimmed = text.trim();
    Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "Exoplanet Detected")]
    ExoplanetDetected,
    #[serde(rename = "Not an Exoplanet")]
    NotAnExoplanet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureImportance {
    pub feature: String,
    pub importance: f64,
    pub detail: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedPoint {
    pub time: f64,
    pub flux: f64,
    pub highlight: bool,
}

/// Analysis outcome rendered by the results card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub verdict: Verdict,
    /// Percent
    pub confidence: u32,
    pub explanation: String,
    pub feature_importances: Vec<FeatureImportance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotated_timeseries: Option<Vec<AnnotatedPoint>>,
}

fn importance(feature: &str, importance: f64, detail: &str) -> FeatureImportance {
    FeatureImportance {
        feature: feature.to_string(),
        importance,
        detail: detail.to_string(),
    }
}

/// Feature attributions reported for each verdict.
pub fn feature_importances(verdict: Verdict) -> Vec<FeatureImportance> {
    match verdict {
        Verdict::ExoplanetDetected => vec![
            importance("Transit Depth", 0.34, "Depth corresponds to ~1.2 Earth radii planet."),
            importance("SNR", 0.22, "High signal-to-noise ratio after detrending."),
            importance("Duration", 0.18, "Transit duration consistent with orbital mechanics."),
            importance("Odd-Even Depth", 0.12, "Consistent depths across multiple transits."),
            importance("Stellar Activity", 0.08, "Low stellar variability, clean transit signal."),
            importance("Period Consistency", 0.06, "Regular periodicity matches orbital prediction."),
        ],
        Verdict::NotAnExoplanet => vec![
            importance("Transit Depth", 0.25, "Depth variations inconsistent with planetary transits."),
            importance("Stellar Activity", 0.30, "High stellar variability masks potential signals."),
            importance("Noise Level", 0.20, "Instrumental noise exceeds signal detection threshold."),
            importance("Periodicity", 0.15, "No clear periodic pattern detected."),
            importance("Quality Flags", 0.10, "Data quality flags indicate systematic issues."),
        ],
    }
}

/// Random-verdict analyzer.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockAnalyzer;

impl MockAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyze with the thread-local RNG.
    pub fn analyze(&self, request: &AnalysisRequest) -> AnalysisResult {
        self.analyze_with_rng(request, &mut rand::thread_rng())
    }

    /// Analyze with a caller-supplied RNG (seeded in tests).
    pub fn analyze_with_rng<R: Rng>(
        &self,
        request: &AnalysisRequest,
        rng: &mut R,
    ) -> AnalysisResult {
        let detected = rng.gen::<f64>() > DETECTION_THRESHOLD;
        let confidence = MIN_CONFIDENCE + rng.gen_range(0..CONFIDENCE_SPAN);
        let verdict = if detected {
            Verdict::ExoplanetDetected
        } else {
            Verdict::NotAnExoplanet
        };

        let annotated = match request.timeseries.as_deref() {
            Some(points) => annotate_points(points, detected, rng),
            None => synthetic_curve(detected, rng),
        };

        log::debug!(
            "Mock analysis ({:?} mode, target {}): {:?} at {}% confidence, {} points",
            request.mode,
            request
                .star_metadata()
                .and_then(|m| m.target_id.as_deref())
                .unwrap_or("unknown"),
            verdict,
            confidence,
            annotated.len()
        );

        AnalysisResult {
            verdict,
            confidence,
            explanation: match verdict {
                Verdict::ExoplanetDetected => POSITIVE_EXPLANATION,
                Verdict::NotAnExoplanet => NEGATIVE_EXPLANATION,
            }
            .to_string(),
            feature_importances: feature_importances(verdict),
            annotated_timeseries: Some(annotated),
        }
    }
}

fn annotate_points<R: Rng>(
    points: &[FluxPoint],
    detected: bool,
    rng: &mut R,
) -> Vec<AnnotatedPoint> {
    points
        .iter()
        .map(|p| AnnotatedPoint {
            time: p.time,
            flux: p.flux,
            highlight: detected && rng.gen::<f64>() > HIGHLIGHT_THRESHOLD,
        })
        .collect()
}

/// Flat curve with noise, plus a box-shaped dip in the middle when a planet
/// was "detected".
fn synthetic_curve<R: Rng>(detected: bool, rng: &mut R) -> Vec<AnnotatedPoint> {
    (0..SYNTHETIC_POINTS)
        .map(|i| {
            let in_transit = detected && i > 40 && i < 60;
            let noise = (rng.gen::<f64>() - 0.5) * SYNTHETIC_NOISE;
            let depth = if in_transit { SYNTHETIC_TRANSIT_DEPTH } else { 0.0 };
            AnnotatedPoint {
                time: SYNTHETIC_START_BJD + i as f64 * SYNTHETIC_CADENCE_DAYS,
                flux: 1.0 + depth + noise,
                highlight: in_transit,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn manual_request() -> AnalysisRequest {
        AnalysisRequest {
            mode: Some(InputMode::Manual),
            metadata: Some(StarMetadata {
                target_id: Some("KIC 8462852".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_confidence_range_and_tables() {
        let analyzer = MockAnalyzer::new();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let result = analyzer.analyze_with_rng(&manual_request(), &mut rng);
            assert!((70..100).contains(&result.confidence));
            let expected_len = match result.verdict {
                Verdict::ExoplanetDetected => 6,
                Verdict::NotAnExoplanet => 5,
            };
            assert_eq!(result.feature_importances.len(), expected_len);
        }
    }

    #[test]
    fn test_both_verdicts_occur() {
        let analyzer = MockAnalyzer::new();
        let mut rng = StdRng::seed_from_u64(42);
        let detections = (0..500)
            .filter(|_| {
                analyzer.analyze_with_rng(&manual_request(), &mut rng).verdict
                    == Verdict::ExoplanetDetected
            })
            .count();
        // ~60% positive; wide bounds keep the seed from mattering
        assert!(detections > 200 && detections < 400, "{} detections", detections);
    }

    #[test]
    fn test_synthetic_curve_shape() {
        let mut rng = StdRng::seed_from_u64(1);
        let curve = synthetic_curve(true, &mut rng);
        assert_eq!(curve.len(), 100);
        assert_eq!(curve[0].time, 2_454_833.0);
        assert!((curve[99].time - (2_454_833.0 + 9.9)).abs() < 1e-6);

        for (i, p) in curve.iter().enumerate() {
            let in_transit = i > 40 && i < 60;
            assert_eq!(p.highlight, in_transit);
            let baseline = if in_transit { 0.98 } else { 1.0 };
            assert!((p.flux - baseline).abs() <= 0.005 + 1e-12);
        }

        let flat = synthetic_curve(false, &mut rng);
        assert!(flat.iter().all(|p| !p.highlight && (p.flux - 1.0).abs() <= 0.005 + 1e-12));
    }

    #[test]
    fn test_uploaded_points_are_echoed() {
        let request = AnalysisRequest {
            mode: Some(InputMode::Upload),
            timeseries: Some(vec![
                FluxPoint { time: 1.0, flux: 0.99, flux_err: Some(0.001) },
                FluxPoint { time: 2.0, flux: 1.01, flux_err: None },
            ]),
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(3);
        let result = MockAnalyzer::new().analyze_with_rng(&request, &mut rng);
        let points = result.annotated_timeseries.unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].time, 1.0);
        assert_eq!(points[1].flux, 1.01);
        if result.verdict == Verdict::NotAnExoplanet {
            assert!(points.iter().all(|p| !p.highlight));
        }
    }

    #[test]
    fn test_result_wire_format() {
        let mut rng = StdRng::seed_from_u64(11);
        let result = MockAnalyzer::new().analyze_with_rng(&manual_request(), &mut rng);
        let value = serde_json::to_value(&result).unwrap();
        let verdict = value["verdict"].as_str().unwrap();
        assert!(verdict == "Exoplanet Detected" || verdict == "Not an Exoplanet");
        assert!(value["feature_importances"].is_array());
        assert!(value["annotated_timeseries"].is_array());
    }

    #[test]
    fn test_request_parses_frontend_payload() {
        let json = r#"{
            "mode": "manual",
            "metadata": {"targetId": "TIC 25155310", "teff": "5800", "sectorQuarter": "14"},
            "timeseries": [{"time": 0.5, "flux": 1.0}]
        }"#;
        let request: AnalysisRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.mode, Some(InputMode::Manual));
        let metadata = request.metadata.unwrap();
        assert_eq!(metadata.target_id.as_deref(), Some("TIC 25155310"));
        assert_eq!(metadata.sector_quarter.as_deref(), Some("14"));
        assert_eq!(request.timeseries.unwrap().len(), 1);
    }

    #[test]
    fn test_request_parses_flat_manual_form() {
        let json = r#"{
            "targetId": "KIC 8462852", "raObj": "", "decObj": "", "keptmagTmag": "",
            "teff": "6750", "logg": "", "feh": "", "radius": "", "mass": "",
            "timeSeries": "", "fluxSeries": "", "fluxError": "",
            "quality": "0", "sectorQuarter": "", "camera": "", "ccd": ""
        }"#;
        let request: AnalysisRequest = serde_json::from_str(json).unwrap();
        assert!(request.mode.is_none());
        assert!(request.timeseries.is_none());

        let metadata = request.star_metadata().unwrap();
        assert_eq!(metadata.target_id.as_deref(), Some("KIC 8462852"));
        assert_eq!(metadata.teff.as_deref(), Some("6750"));
        assert_eq!(metadata.quality.as_deref(), Some("0"));
        assert!(metadata.ra_obj.is_none());

        let mut rng = StdRng::seed_from_u64(5);
        let result = MockAnalyzer::new().analyze_with_rng(&request, &mut rng);
        assert_eq!(result.annotated_timeseries.unwrap().len(), 100);
    }

    #[test]
    fn test_request_tolerates_odd_shapes() {
        let request: AnalysisRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request, AnalysisRequest::default());
        assert!(request.star_metadata().is_none());

        let request: AnalysisRequest = serde_json::from_str(
            r#"{"mode": "batch", "timeseries": "1,2,3", "metadata": 7, "teff": 5800}"#,
        )
        .unwrap();
        assert!(request.mode.is_none());
        assert!(request.timeseries.is_none());
        assert!(request.metadata.is_none());
        assert_eq!(request.form.teff.as_deref(), Some("5800"));
    }
}
