use regime_core::KeyEvent;

/// Key events around the 2008 regime shift. Three fall on days without an
/// observation (before the series, a Sunday and a Saturday).
pub fn rows() -> Vec<KeyEvent> {
    vec![
        KeyEvent::new("2008-08-08 00:00:00", "Russia-Georgia war begins"),
        KeyEvent::new("2008-09-07 00:00:00", "Fannie Mae and Freddie Mac taken over"),
        KeyEvent::new("2008-09-09 00:00:00", "OPEC agrees to cut output"),
        KeyEvent::new("2008-09-13 00:00:00", "Hurricane Ike makes landfall"),
        KeyEvent::new("2008-09-15 00:00:00", "Lehman Brothers files for bankruptcy"),
        KeyEvent::new("2008-09-16 00:00:00", "AIG rescue"),
    ]
}
