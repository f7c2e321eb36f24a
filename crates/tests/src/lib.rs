#[cfg(test)]
mod common;


#[cfg(test)]
mod confirm_dose_tests;


#[cfg(test)]
mod request_failure_tests;
