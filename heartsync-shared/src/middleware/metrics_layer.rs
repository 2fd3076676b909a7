use metrics::{counter, histogram};

pub fn record_swipe(direction: &'static str) {
    counter!("heartsync_swipes_total", "direction" => direction).increment(1);
}

pub fn record_match() {
    counter!("heartsync_matches_total").increment(1);
}

pub fn record_message_sent() {
    counter!("heartsync_messages_sent_total").increment(1);
}

pub fn record_auth_attempt(operation: &'static str, success: bool) {
    let outcome = if success { "success" } else { "failure" };
    counter!(
        "heartsync_auth_attempts_total",
        "operation" => operation,
        "outcome" => outcome
    )
    .increment(1);
}

pub fn record_filters_applied(queue_size: usize) {
    counter!("heartsync_filters_applied_total").increment(1);
    histogram!("heartsync_candidate_queue_size").record(queue_size as f64);
}
