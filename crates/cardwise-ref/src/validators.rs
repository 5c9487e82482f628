//! In-memory frequent flyer number validators.
//!
//! `InMemoryValidator` answers from a `NumberMatcher` and reports a licence
//! from a `LicenseSource`. `ScriptedValidator` replays a fixed sequence of
//! answers, which is how flaky vendor behaviour is reproduced.
//!
//! Both fire every subscribed `LookupHook` once per `is_valid()` call,
//! before the answer is produced and after the state lock is released, so a
//! hook may call back into the validator.

use std::sync::Mutex;

use tracing::debug;

use cardwise_contracts::{
    error::{CardwiseError, CardwiseResult},
    validation::{ServiceInformation, ValidationMode},
};
use cardwise_core::traits::{FrequentFlyerNumberValidator, LookupHook};

// ── Matching ──────────────────────────────────────────────────────────────────

/// Which frequent flyer numbers a validator treats as valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumberMatcher {
    /// Every number, including an absent one.
    Any,
    /// Exactly this number.
    Exactly(String),
    /// Numbers starting with this prefix.
    StartsWith(String),
    /// Numbers between `low` and `high` inclusive, compared lexically.
    InRange { low: String, high: String },
    /// Any of the listed numbers.
    OneOf(Vec<String>),
    /// Numbers containing at least one ASCII lowercase letter.
    ContainsLowercase,
}

impl NumberMatcher {
    /// Return true if `number` is accepted. Only `Any` accepts `None`.
    pub fn matches(&self, number: Option<&str>) -> bool {
        let Some(number) = number else {
            return matches!(self, NumberMatcher::Any);
        };

        match self {
            NumberMatcher::Any => true,
            NumberMatcher::Exactly(expected) => number == expected,
            NumberMatcher::StartsWith(prefix) => number.starts_with(prefix.as_str()),
            NumberMatcher::InRange { low, high } => {
                number >= low.as_str() && number <= high.as_str()
            }
            NumberMatcher::OneOf(candidates) => candidates.iter().any(|c| c == number),
            NumberMatcher::ContainsLowercase => number.chars().any(|c| c.is_ascii_lowercase()),
        }
    }
}

// ── Licensing ─────────────────────────────────────────────────────────────────

/// Where a validator's licence key comes from.
pub enum LicenseSource {
    /// A key fixed at construction.
    Fixed(String),
    /// A key computed on every read, e.g. from a vendor-supplied constants file.
    Deferred(Box<dyn Fn() -> String + Send + Sync>),
    /// Service information cannot be read; carries the failure reason.
    Unavailable(String),
}

impl LicenseSource {
    fn service_information(&self) -> CardwiseResult<ServiceInformation> {
        match self {
            LicenseSource::Fixed(key) => Ok(ServiceInformation::with_license_key(key.clone())),
            LicenseSource::Deferred(read) => Ok(ServiceInformation::with_license_key(read())),
            LicenseSource::Unavailable(reason) => Err(CardwiseError::LicenseUnavailable {
                reason: reason.clone(),
            }),
        }
    }
}

// ── Shared interior state ─────────────────────────────────────────────────────

#[derive(Default)]
struct ValidatorState {
    mode: Option<ValidationMode>,
    hooks: Vec<LookupHook>,
    lookups: u64,
}

impl ValidatorState {
    /// Record one lookup and return the hooks to notify once unlocked.
    fn record_lookup(&mut self) -> Vec<LookupHook> {
        self.lookups += 1;
        self.hooks.clone()
    }
}

fn notify(hooks: Vec<LookupHook>) {
    for hook in hooks {
        hook();
    }
}

// ── InMemoryValidator ─────────────────────────────────────────────────────────

/// A validator that answers from a `NumberMatcher`.
pub struct InMemoryValidator {
    matcher: NumberMatcher,
    license: LicenseSource,
    state: Mutex<ValidatorState>,
}

impl InMemoryValidator {
    /// A validator with licence key `"OK"` accepting numbers per `matcher`.
    pub fn new(matcher: NumberMatcher) -> Self {
        Self {
            matcher,
            license: LicenseSource::Fixed("OK".to_string()),
            state: Mutex::new(ValidatorState::default()),
        }
    }

    pub fn with_license(mut self, license: LicenseSource) -> Self {
        self.license = license;
        self
    }

    pub fn with_license_key(self, key: impl Into<String>) -> Self {
        self.with_license(LicenseSource::Fixed(key.into()))
    }

    /// The most recent mode set by the evaluator, if any.
    pub fn current_mode(&self) -> Option<ValidationMode> {
        self.state.lock().expect("validator state lock poisoned").mode
    }

    /// Lookups performed so far.
    pub fn lookups(&self) -> u64 {
        self.state.lock().expect("validator state lock poisoned").lookups
    }
}

impl FrequentFlyerNumberValidator for InMemoryValidator {
    fn set_mode(&self, mode: ValidationMode) {
        self.state.lock().expect("validator state lock poisoned").mode = Some(mode);
    }

    fn service_information(&self) -> CardwiseResult<ServiceInformation> {
        self.license.service_information()
    }

    fn is_valid(&self, frequent_flyer_number: Option<&str>) -> CardwiseResult<bool> {
        let (hooks, mode) = {
            let mut state = self.state.lock().map_err(|e| CardwiseError::LookupFailed {
                reason: format!("validator state lock poisoned: {}", e),
            })?;
            (state.record_lookup(), state.mode)
        };
        notify(hooks);

        let valid = self.matcher.matches(frequent_flyer_number);
        debug!(mode = ?mode, valid, "in-memory lookup");
        Ok(valid)
    }

    fn subscribe_lookups(&self, hook: LookupHook) {
        self.state
            .lock()
            .expect("validator state lock poisoned")
            .hooks
            .push(hook);
    }
}

// ── ScriptedValidator ─────────────────────────────────────────────────────────

/// One reply in a `ScriptedValidator` script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptedAnswer {
    Valid,
    Invalid,
    /// The vendor errored; `is_valid()` returns `LookupFailed`.
    Unavailable,
}

/// A validator that replays its script in order, wrapping around at the end.
///
/// Every reply, including `Unavailable`, counts as a performed lookup.
pub struct ScriptedValidator {
    script: Vec<ScriptedAnswer>,
    license: LicenseSource,
    state: Mutex<ValidatorState>,
}

impl ScriptedValidator {
    pub fn new(script: Vec<ScriptedAnswer>) -> Self {
        Self {
            script,
            license: LicenseSource::Fixed("OK".to_string()),
            state: Mutex::new(ValidatorState::default()),
        }
    }

    /// Alternate between invalid and valid, starting with invalid.
    pub fn alternating() -> Self {
        Self::new(vec![ScriptedAnswer::Invalid, ScriptedAnswer::Valid])
    }

    pub fn with_license(mut self, license: LicenseSource) -> Self {
        self.license = license;
        self
    }
}

impl FrequentFlyerNumberValidator for ScriptedValidator {
    fn set_mode(&self, mode: ValidationMode) {
        self.state.lock().expect("validator state lock poisoned").mode = Some(mode);
    }

    fn service_information(&self) -> CardwiseResult<ServiceInformation> {
        self.license.service_information()
    }

    fn is_valid(&self, _frequent_flyer_number: Option<&str>) -> CardwiseResult<bool> {
        if self.script.is_empty() {
            return Err(CardwiseError::LookupFailed {
                reason: "scripted validator has no answers".to_string(),
            });
        }

        let (hooks, answer, lookup) = {
            let mut state = self.state.lock().map_err(|e| CardwiseError::LookupFailed {
                reason: format!("validator state lock poisoned: {}", e),
            })?;
            let answer = self.script[(state.lookups as usize) % self.script.len()];
            (state.record_lookup(), answer, state.lookups)
        };
        notify(hooks);

        match answer {
            ScriptedAnswer::Valid => Ok(true),
            ScriptedAnswer::Invalid => Ok(false),
            ScriptedAnswer::Unavailable => Err(CardwiseError::LookupFailed {
                reason: format!("scripted vendor outage on lookup {}", lookup),
            }),
        }
    }

    fn subscribe_lookups(&self, hook: LookupHook) {
        self.state
            .lock()
            .expect("validator state lock poisoned")
            .hooks
            .push(hook);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    use super::*;

    #[test]
    fn matcher_variants() {
        assert!(NumberMatcher::Any.matches(None));
        assert!(NumberMatcher::Exactly("x".into()).matches(Some("x")));
        assert!(!NumberMatcher::Exactly("x".into()).matches(Some("y")));
        assert!(NumberMatcher::StartsWith("y".into()).matches(Some("yes")));
        assert!(!NumberMatcher::StartsWith("y".into()).matches(Some("no")));

        let range = NumberMatcher::InRange {
            low: "a".into(),
            high: "z".into(),
        };
        assert!(range.matches(Some("a")));
        assert!(range.matches(Some("m")));
        assert!(range.matches(Some("z")));
        assert!(!range.matches(Some("zz")));

        let one_of = NumberMatcher::OneOf(vec!["x".into(), "y".into(), "z".into()]);
        assert!(one_of.matches(Some("y")));
        assert!(!one_of.matches(Some("w")));

        assert!(NumberMatcher::ContainsLowercase.matches(Some("AB-c1")));
        assert!(!NumberMatcher::ContainsLowercase.matches(Some("AB-12")));
    }

    #[test]
    fn only_any_accepts_absent_number() {
        assert!(!NumberMatcher::ContainsLowercase.matches(None));
        assert!(!NumberMatcher::Exactly(String::new()).matches(None));
        assert!(NumberMatcher::Exactly(String::new()).matches(Some("")));
    }

    #[test]
    fn in_memory_validator_fires_hooks_and_records_mode() {
        let validator = InMemoryValidator::new(NumberMatcher::Any);
        let fired = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&fired);
        validator.subscribe_lookups(Arc::new(move || {
            counter.fetch_add(1, Ordering::Relaxed);
        }));

        validator.set_mode(ValidationMode::Detailed);
        assert!(validator.is_valid(Some("x")).unwrap());
        assert!(validator.is_valid(None).unwrap());

        assert_eq!(fired.load(Ordering::Relaxed), 2);
        assert_eq!(validator.lookups(), 2);
        assert_eq!(validator.current_mode(), Some(ValidationMode::Detailed));
    }

    /// A hook may read the validator it is subscribed to.
    #[test]
    fn hooks_can_call_back_into_the_validator() {
        let validator = Arc::new(InMemoryValidator::new(NumberMatcher::Any));
        let seen = Arc::new(Mutex::new(Vec::new()));

        let observed = Arc::clone(&validator);
        let sink = Arc::clone(&seen);
        validator.subscribe_lookups(Arc::new(move || {
            sink.lock()
                .unwrap()
                .push((observed.lookups(), observed.current_mode()));
        }));

        validator.set_mode(ValidationMode::Quick);
        assert!(validator.is_valid(Some("y")).unwrap());

        assert_eq!(*seen.lock().unwrap(), vec![(1, Some(ValidationMode::Quick))]);
    }

    #[test]
    fn scripted_hooks_can_call_back_into_the_validator() {
        let validator = Arc::new(ScriptedValidator::alternating());
        let fired = Arc::new(AtomicU64::new(0));

        let observed = Arc::clone(&validator);
        let counter = Arc::clone(&fired);
        validator.subscribe_lookups(Arc::new(move || {
            observed.set_mode(ValidationMode::Detailed);
            counter.fetch_add(1, Ordering::Relaxed);
        }));

        assert!(!validator.is_valid(Some("y")).unwrap());
        assert_eq!(fired.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn deferred_licence_is_read_each_time() {
        let reads = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&reads);
        let validator = InMemoryValidator::new(NumberMatcher::Any).with_license(
            LicenseSource::Deferred(Box::new(move || {
                counter.fetch_add(1, Ordering::Relaxed);
                "EXPIRED".to_string()
            })),
        );

        assert_eq!(validator.license_key().unwrap(), "EXPIRED");
        assert_eq!(validator.license_key().unwrap(), "EXPIRED");
        assert_eq!(reads.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn unavailable_licence_is_an_error() {
        let validator = InMemoryValidator::new(NumberMatcher::Any)
            .with_license(LicenseSource::Unavailable("metadata endpoint down".into()));

        assert!(matches!(
            validator.license_key(),
            Err(CardwiseError::LicenseUnavailable { .. })
        ));
    }

    #[test]
    fn scripted_validator_wraps_around() {
        let validator = ScriptedValidator::new(vec![
            ScriptedAnswer::Invalid,
            ScriptedAnswer::Valid,
            ScriptedAnswer::Unavailable,
        ]);

        assert!(!validator.is_valid(Some("y")).unwrap());
        assert!(validator.is_valid(Some("y")).unwrap());
        assert!(matches!(
            validator.is_valid(Some("y")),
            Err(CardwiseError::LookupFailed { .. })
        ));
        assert!(!validator.is_valid(Some("y")).unwrap());
    }

    #[test]
    fn empty_script_fails_without_counting() {
        let validator = ScriptedValidator::new(vec![]);
        let fired = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&fired);
        validator.subscribe_lookups(Arc::new(move || {
            counter.fetch_add(1, Ordering::Relaxed);
        }));

        assert!(validator.is_valid(Some("y")).is_err());
        assert_eq!(fired.load(Ordering::Relaxed), 0);
    }
}
