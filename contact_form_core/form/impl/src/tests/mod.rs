use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use contact_form_models::form::FormId;
use contact_form_shared_contracts::{id::MockIdService, time::MockTimeService};
use contact_form_shared_impl::{
    id::IdServiceImpl, time::TimeServiceImpl, validation::ValidationServiceImpl,
};

use crate::{FormFeatureConfig, FormFeatureServiceImpl};

mod submit;

type Sut = FormFeatureServiceImpl<TimeServiceImpl, MockIdService, ValidationServiceImpl>;

fn sut(form_id: Option<FormId>) -> Sut {
    sut_with_config(form_id, FormFeatureConfig::default())
}

fn sut_with_config(form_id: Option<FormId>, config: FormFeatureConfig) -> Sut {
    let id = match form_id {
        Some(form_id) => MockIdService::new().with_generate(form_id),
        None => MockIdService::new(),
    };
    FormFeatureServiceImpl::new(TimeServiceImpl, id, ValidationServiceImpl, config)
}

/// A service generating random ids, for tests mounting more than one form.
fn sut_with_random_ids() -> FormFeatureServiceImpl<TimeServiceImpl, IdServiceImpl, ValidationServiceImpl>
{
    FormFeatureServiceImpl::new(
        TimeServiceImpl,
        IdServiceImpl,
        ValidationServiceImpl,
        Default::default(),
    )
}

/// A clock that only moves when told to.
#[derive(Debug, Clone)]
struct Clock(Arc<Mutex<DateTime<Utc>>>);

impl Clock {
    fn new(now: DateTime<Utc>) -> Self {
        Self(Arc::new(Mutex::new(now)))
    }

    fn advance(&self, duration: std::time::Duration) {
        let mut now = self.0.lock().unwrap();
        *now = *now + duration;
    }

    fn service(&self) -> MockTimeService {
        let clock = self.clone();
        let mut time = MockTimeService::new();
        time.expect_now()
            .returning(move || *clock.0.lock().unwrap());
        time
    }
}
