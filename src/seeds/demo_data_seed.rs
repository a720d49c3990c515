use serde_json::{json, Map};

use crate::models::{Case, CaseStatus, User};
use crate::store::MockStore;
use crate::utils::ids::now_iso;

/// Seeds the demo imam account and one fundraising case so the API has
/// browsable data right after boot. Only inserts into empty collections.
pub fn seed_demo_data(store: &MockStore) {
    {
        let mut users = store.users();
        if users.is_empty() {
            users.push(imam_user());
            log::info!("🌱 Demo data: seeded verified imam account (user_001)");
        } else {
            log::info!(
                "🌱 Demo data: {} users already present, skipping user seed",
                users.len()
            );
        }
    }

    {
        let mut cases = store.cases();
        if cases.is_empty() {
            cases.push(medical_case());
            log::info!("🌱 Demo data: seeded pending medical case (case_001)");
        } else {
            log::info!(
                "🌱 Demo data: {} cases already present, skipping case seed",
                cases.len()
            );
        }
    }

    log::info!("✅ Demo data ready");
}

/// The pre-verified imam who "owns" the demo mosque.
fn imam_user() -> User {
    User {
        id: "user_001".into(),
        cnic: Some("42101-1234567-8".into()),
        phone_number: Some("+923001234567".into()),
        location: Some("Karachi".into()),
        role: Some("imam".into()),
        is_verified: true,
        additional_info: Some(json!({
            "mosqueName": "Masjid Al-Noor",
            "mosqueAddress": "Block 5, Gulshan-e-Iqbal"
        })),
        created_at: now_iso(),
        extra: Map::new(),
    }
}

/// One imam-verified case still waiting on admin approval, part-funded so
/// the report endpoint has something to aggregate.
fn medical_case() -> Case {
    let mut extra = Map::new();
    extra.insert("beneficiaryId".into(), json!("ben_001"));
    extra.insert("mosqueName".into(), json!("Masjid Al-Noor"));

    Case {
        id: "case_001".into(),
        beneficiary_name: Some("Sara Ahmed".into()),
        title: Some("Urgent Medical Treatment for Heart Surgery".into()),
        description: Some(
            "Sara Ahmed, a 45-year-old mother of three, urgently needs heart surgery.".into(),
        ),
        case_type: Some("medical".into()),
        target_amount: Some(500_000.0),
        raised_amount: 125_000.0,
        location: Some("Karachi, Gulshan-e-Iqbal".into()),
        mosque_id: Some("mosque_001".into()),
        is_imam_verified: Some(true),
        is_admin_approved: false,
        status: CaseStatus::Pending,
        created_at: now_iso(),
        updated_at: None,
        extra,
    }
}
