use crate::error::EstimatorErrors;
use crate::messages::Message;
use crate::warning::EstimatorWarnings;
use log::{error, info, warn};
use std::io::Write;

///Logs at error level the given error
pub fn show_error_message(error: &EstimatorErrors) {
    let (error_code, message) = error.get_code_and_message();
    error!("\n");
    error!("**************************************************");
    error!("\tVolumetric Ran into an error");
    error!("\tError Code: {:#X}", error_code);
    error!("\t{}", message);
    error!("**************************************************");
    error!("\n\n\n");
}

///Outputs the binary serial version of the error to stdout
pub fn send_error_message(error: EstimatorErrors) {
    let stdout = std::io::stdout();
    let mut stdio_lock = stdout.lock();

    let message = Message::Error(error);
    bincode::serialize_into(&mut stdio_lock, &message).expect("Write Limit should not be hit");
    stdio_lock.flush().expect("Standard Out should be limited");
}

///Logs at warn level the given warning
pub fn show_warning_message(warning: &EstimatorWarnings) {
    let (warning_code, message) = warning.get_code_and_message();
    warn!("\n");
    warn!("**************************************************");
    warn!("\tVolumetric found a warning");
    warn!("\tWarning Code: {:#X}", warning_code);
    warn!("\t{}", message);
    warn!("**************************************************");
    warn!("\n\n\n");
}

///Outputs the binary serial version of the warning to stdout
pub fn send_warning_message(warning: EstimatorWarnings) {
    let stdout = std::io::stdout();
    let mut stdio_lock = stdout.lock();

    let message = Message::Warning(warning);
    bincode::serialize_into(&mut stdio_lock, &message).expect("Write Limit should not be hit");
    stdio_lock.flush().expect("Standard Out should be limited");
}

///Reports a state change, either as a log line or an IPC message
pub fn display_state_update(state_message: &str, send_messages: bool) {
    if send_messages {
        let stdout = std::io::stdout();
        let mut stdio_lock = stdout.lock();

        let message = Message::StateUpdate(state_message.to_string());
        bincode::serialize_into(&mut stdio_lock, &message).expect("Write Limit should not be hit");
        stdio_lock.flush().expect("Standard Out should be limited");
    } else {
        info!("{}", state_message);
    }
}
