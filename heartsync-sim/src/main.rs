use heartsync_shared::types::auth::AuthCredentials;
use heartsync_store::{
    CardRelease, FilterUpdate, Store, StoreConfig, SystemEnv, UserUpdate,
};

/// Drag distances replayed against the deck, in points.
const DRAGS: [f64; 6] = [180.0, -150.0, 60.0, 240.0, -300.0, 130.0];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    heartsync_shared::middleware::init_tracing("heartsync-sim")?;

    let config = StoreConfig::load()?;
    let mut store = Store::from_config(SystemEnv, config)?;

    let mut events = store.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            tracing::debug!(event_type = %event.event_type, user_id = ?event.user_id, "store event");
        }
    });

    let credentials = AuthCredentials::new("demo@heartsync.app", "demo1234");
    if !store.login(&credentials).await {
        anyhow::bail!("demo login rejected");
    }

    store.update_current_user(UserUpdate {
        bio: Some("Trying out the simulator.".into()),
        ..Default::default()
    });
    store.add_interest("Board games")?;
    store.save_profile();

    store.update_filters(FilterUpdate {
        gender: Some(vec!["Female".into(), "Non-binary".into()]),
        age_range: Some((21, 40)),
        ..Default::default()
    });
    let deck = store.apply_filters();
    tracing::info!(deck, "deck ready");

    for dx in DRAGS {
        let outcome = store.release_card(dx);
        match (outcome.release, outcome.match_id) {
            (CardRelease::SnapBack, _) => tracing::info!(dx, "card snapped back"),
            (CardRelease::Swipe(direction), Some(match_id)) => {
                tracing::info!(%direction, user_id = ?outcome.user_id, %match_id, "it's a match");
                store.send_message(&match_id, "Hi! Nice to match with you.");
            }
            (CardRelease::Swipe(direction), None) => {
                tracing::info!(%direction, user_id = ?outcome.user_id, "swiped");
            }
        }
    }

    for m in store.matches() {
        tracing::info!(
            match_id = %m.id,
            name = %m.user.name,
            unread = m.unread_count,
            last = ?m.last_message.as_ref().map(|msg| msg.text.as_str()),
            "match"
        );
    }
    let match_ids: Vec<String> = store.matches().iter().map(|m| m.id.clone()).collect();
    for id in &match_ids {
        store.mark_messages_as_read(id);
    }
    tracing::info!(unread = store.total_unread(), "inbox cleared");

    if let Some(plan) = store.default_plan() {
        let subscription = store.upgrade_premium(plan.id).await?;
        tracing::info!(plan_id = %subscription.plan_id, expires_at = %subscription.expires_at, "premium active");
    }

    store.logout();
    tracing::info!("session finished");
    Ok(())
}
