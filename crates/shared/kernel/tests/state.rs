use phub_domain::config::EdgeConfig;
use phub_domain::registry::{FeatureSlice, InitializedSlice};
use phub_kernel::server::{ApiState, ApiStateError};

#[derive(Debug)]
struct Probe {
    marker: u32,
}

impl FeatureSlice for Probe {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn name(&self) -> &'static str {
        "probe"
    }
}

#[test]
fn build_requires_config() {
    let err = ApiState::builder().build().unwrap_err();
    assert!(matches!(err, ApiStateError::Validation { .. }));
}

#[test]
fn registered_slice_is_retrievable() {
    let state = ApiState::builder()
        .config(EdgeConfig::default())
        .register_slice(InitializedSlice::new(Probe { marker: 9 }))
        .build()
        .expect("state");

    let probe = state.try_get_slice::<Probe>().expect("probe slice");
    assert_eq!(probe.marker, 9);
    assert_eq!(state.slice_names().collect::<Vec<_>>(), vec!["probe"]);
}

#[test]
fn missing_slice_is_a_distinct_error() {
    let state = ApiState::builder().config(EdgeConfig::default()).build().expect("state");

    assert!(state.get_slice::<Probe>().is_none());
    assert!(matches!(state.try_get_slice::<Probe>(), Err(ApiStateError::MissingSlice { .. })));
}
