use regime_core::ChangePointResult;

pub fn result() -> ChangePointResult {
    ChangePointResult {
        date: "2008-08-21".to_string(),
        sigma_before: 0.023,
        sigma_after: 0.029,
        prob_sigma_increase: 100.0,
        mu_before: Some(0.0003),
        mu_after: Some(-0.0001),
    }
}
