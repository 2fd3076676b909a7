use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PremiumPlan {
    pub id: &'static str,
    pub duration: &'static str,
    pub months: u32,
    pub price_cents: u32,
    pub per_month_cents: u32,
    pub savings_percent: Option<u8>,
    pub popular: bool,
}

impl PremiumPlan {
    pub fn price_label(&self) -> String {
        format_usd(self.price_cents)
    }

    pub fn per_month_label(&self) -> String {
        format!("{}/month", format_usd(self.per_month_cents))
    }

    pub fn savings_label(&self) -> Option<String> {
        self.savings_percent.map(|p| format!("Save {p}%"))
    }
}

const PLANS: [PremiumPlan; 4] = [
    PremiumPlan {
        id: "1month",
        duration: "1 Month",
        months: 1,
        price_cents: 1999,
        per_month_cents: 1999,
        savings_percent: None,
        popular: false,
    },
    PremiumPlan {
        id: "3months",
        duration: "3 Months",
        months: 3,
        price_cents: 4499,
        per_month_cents: 1499,
        savings_percent: Some(25),
        popular: false,
    },
    PremiumPlan {
        id: "6months",
        duration: "6 Months",
        months: 6,
        price_cents: 5999,
        per_month_cents: 999,
        savings_percent: Some(50),
        popular: true,
    },
    PremiumPlan {
        id: "12months",
        duration: "12 Months",
        months: 12,
        price_cents: 9599,
        per_month_cents: 799,
        savings_percent: Some(60),
        popular: false,
    },
];

pub const DEFAULT_PLAN_ID: &str = "6months";

pub fn plans() -> &'static [PremiumPlan] {
    &PLANS
}

pub fn find_plan(plan_id: &str) -> Option<&'static PremiumPlan> {
    PLANS.iter().find(|p| p.id == plan_id)
}

fn format_usd(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}
