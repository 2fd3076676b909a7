use chrono::Months;

use heartsync_shared::errors::{AppError, AppResult, ErrorCode};

use crate::env::Environment;
use crate::events::StoreEvent;
use crate::models::PremiumSubscription;
use crate::premium::{find_plan, plans, PremiumPlan, DEFAULT_PLAN_ID};

use super::Store;

impl<E: Environment> Store<E> {
    pub fn premium_plans(&self) -> &'static [PremiumPlan] {
        plans()
    }

    pub fn default_plan(&self) -> Option<&'static PremiumPlan> {
        find_plan(DEFAULT_PLAN_ID)
    }

    pub fn premium(&self) -> Option<&PremiumSubscription> {
        self.state.premium.as_ref()
    }

    pub fn is_premium(&self) -> bool {
        self.state.premium.is_some()
    }

    /// Simulated checkout. Checks are made before the payment delay so a
    /// bad request fails fast.
    pub async fn upgrade_premium(&mut self, plan_id: &str) -> AppResult<PremiumSubscription> {
        if !self.state.is_authenticated {
            return Err(AppError::not_authenticated());
        }
        let plan = find_plan(plan_id).ok_or_else(|| {
            AppError::new(ErrorCode::PlanNotFound, format!("no plan named {plan_id}"))
        })?;
        if self.state.premium.is_some() {
            return Err(AppError::new(ErrorCode::AlreadyPremium, "already subscribed"));
        }

        self.env.sleep(self.config.upgrade_delay()).await;

        let started_at = self.env.now();
        let expires_at = started_at
            .checked_add_months(Months::new(plan.months))
            .ok_or_else(|| AppError::internal("subscription end out of range"))?;
        let subscription = PremiumSubscription {
            plan_id: plan.id.to_string(),
            started_at,
            expires_at,
        };
        self.state.premium = Some(subscription.clone());

        tracing::info!(plan_id = plan.id, price = %plan.price_label(), "premium activated");
        self.publish(StoreEvent::PremiumActivated {
            plan_id: plan.id.to_string(),
        });
        Ok(subscription)
    }
}
