//! Archive provider HTTP clients.

pub mod archive_today;
pub mod wayback;

fn transport_error(err: &reqwest::Error) -> sg_core::archive::ProbeError {
    if err.is_timeout() {
        sg_core::archive::ProbeError::Timeout
    } else {
        sg_core::archive::ProbeError::Network(err.to_string())
    }
}
