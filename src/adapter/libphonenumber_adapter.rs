// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::panic::{self, AssertUnwindSafe};

use log::{error, trace};
use phonenumber::{
    Mode, PhoneNumber,
    metadata::{DATABASE, Metadata},
};

use super::{AdapterError, PhoneNumberAdapter};

/// Adapter over the `phonenumber` crate, which carries the complete
/// libphonenumber metadata.
///
/// The crate is known to panic on some malformed inputs, so every call is
/// made under `catch_unwind` and a panic is reported as
/// [`AdapterError::Internal`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LibPhoneNumberAdapter;

/// Region id the metadata uses for non-geographic calling codes (+800, +882...).
const NON_GEOGRAPHIC_REGION: &str = "001";

impl LibPhoneNumberAdapter {
    /// Runs `call`, turning a panic into [`AdapterError::Internal`].
    ///
    /// `catch_unwind` only stops the unwinding: the default panic hook has
    /// already written its "thread '..' panicked at" line to stderr by then.
    /// Callers that want the `error!` record alone must install their own hook
    /// with [`std::panic::set_hook`].
    fn guarded<T>(operation: &str, call: impl FnOnce() -> T) -> Result<T, AdapterError> {
        panic::catch_unwind(AssertUnwindSafe(call)).map_err(|payload| {
            let message = panic_message(payload.as_ref());
            error!("phonenumber crate panicked during {}: {}", operation, message);
            AdapterError::Internal(format!("panic during {}: {}", operation, message))
        })
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_owned()
    }
}

impl PhoneNumberAdapter for LibPhoneNumberAdapter {
    type Number = PhoneNumber;

    fn parse(&self, candidate: &str) -> Result<PhoneNumber, AdapterError> {
        Self::guarded("parse", || phonenumber::parse(None, candidate))?.map_err(|err| {
            trace!("phonenumber rejected {:?}: {:?}", candidate, err);
            AdapterError::Parse {
                kind: format!("{:?}", err),
                detail: err.to_string(),
            }
        })
    }

    fn is_valid(&self, number: &PhoneNumber) -> bool {
        Self::guarded("validation", || phonenumber::is_valid(number)).unwrap_or(false)
    }

    fn format_e164(&self, number: &PhoneNumber) -> Result<String, AdapterError> {
        Self::guarded("formatting", || {
            phonenumber::format(number).mode(Mode::E164).to_string()
        })
    }

    fn region_code(&self, number: &PhoneNumber) -> Option<String> {
        Self::guarded("region lookup", || region_for_number(number))
            .ok()
            .flatten()
    }
}

/// Resolves the region of `number` from its calling code and national number.
///
/// `PhoneNumber::country()` looks the region up from the numeric value of the
/// national number, which drops Italian-style leading zeros. This walks the
/// same metadata with the national number as text.
fn region_for_number(number: &PhoneNumber) -> Option<String> {
    let country_code = number.code().value();
    let national_number = number.national().to_string();
    let regions = DATABASE.region(&country_code)?;

    if let [region] = regions.as_slice() {
        return (*region != NON_GEOGRAPHIC_REGION).then(|| (*region).to_owned());
    }
    regions
        .into_iter()
        .find(|region| {
            DATABASE
                .by_id(*region)
                .is_some_and(|metadata| is_number_from_region(metadata, &national_number))
        })
        .map(str::to_owned)
}

fn is_number_from_region(metadata: &Metadata, national_number: &str) -> bool {
    if let Some(leading_digits) = metadata.leading_digits() {
        return leading_digits
            .find(national_number)
            .is_some_and(|found| found.start() == 0);
    }
    let descriptors = metadata.descriptors();
    if !descriptors.general().is_match(national_number) {
        return false;
    }
    // the general description alone is too broad on shared codes: US's covers
    // every Canadian number, so one of the typed descriptions has to match
    [
        descriptors.fixed_line(),
        descriptors.mobile(),
        descriptors.toll_free(),
        descriptors.premium_rate(),
        descriptors.shared_cost(),
        descriptors.personal_number(),
        descriptors.voip(),
        descriptors.pager(),
        descriptors.uan(),
        descriptors.voicemail(),
    ]
    .into_iter()
    .flatten()
    .any(|descriptor| descriptor.is_match(national_number))
}
