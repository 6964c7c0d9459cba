//! Unit tests for wr-directions.

#[cfg(test)]
mod helpers {
    use wr_geo::{GeoPoint, GeoSegment};
    use wr_route::{GeoFeature, Route};

    pub fn seg(name: &str, from: (i32, i32), to: (i32, i32)) -> GeoSegment {
        GeoSegment::new(
            name,
            GeoPoint::new(from.0, from.1).unwrap(),
            GeoPoint::new(to.0, to.1).unwrap(),
        )
    }

    /// Due south, 20 288 millionths of a degree ≈ 2.25 km (45 walking minutes).
    pub fn hanita() -> GeoFeature {
        GeoFeature::new(seg("Hanita", (20_288, 0), (0, 0)))
    }

    /// North on "A" (2 segments), east on "B" (2 segments), north on "A".
    pub fn zigzag() -> Route {
        Route::from_segments([
            seg("A", (0, 0), (1_000, 0)),
            seg("A", (1_000, 0), (2_000, 0)),
            seg("B", (2_000, 0), (2_000, 1_000)),
            seg("B", (2_000, 1_000), (2_000, 2_000)),
            seg("A", (2_000, 2_000), (3_000, 2_000)),
        ])
        .unwrap()
        .unwrap()
    }
}

// ── Turn classification ───────────────────────────────────────────────────────

#[cfg(test)]
mod turn {
    use approx::assert_abs_diff_eq;

    use crate::{Turn, classify_turn, heading_delta};

    #[test]
    fn delta_range() {
        assert_abs_diff_eq!(heading_delta(10.0, 20.0), 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(heading_delta(20.0, 10.0), -10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(heading_delta(350.0, 10.0), 20.0, epsilon = 1e-9);
        assert_abs_diff_eq!(heading_delta(10.0, 350.0), -20.0, epsilon = 1e-9);
        assert_eq!(heading_delta(0.0, 180.0), -180.0);
        assert_eq!(heading_delta(180.0, 0.0), -180.0);
        assert_eq!(heading_delta(90.0, 90.0), 0.0);
    }

    #[test]
    fn zero_delta_is_straight() {
        for h in [0.0, 45.0, 190.0, 359.5] {
            assert_eq!(classify_turn(h, h), Turn::Straight);
        }
    }

    #[test]
    fn bucket_boundaries_right() {
        assert_eq!(classify_turn(0.0, 0.999), Turn::Straight);
        assert_eq!(classify_turn(0.0, 1.0), Turn::SlightRight);
        assert_eq!(classify_turn(0.0, 44.999), Turn::SlightRight);
        assert_eq!(classify_turn(0.0, 45.0), Turn::Right);
        assert_eq!(classify_turn(0.0, 119.999), Turn::Right);
        assert_eq!(classify_turn(0.0, 120.0), Turn::SharpRight);
        assert_eq!(classify_turn(0.0, 179.999), Turn::SharpRight);
    }

    #[test]
    fn bucket_boundaries_left() {
        assert_eq!(classify_turn(0.0, 359.5), Turn::Straight);
        assert_eq!(classify_turn(0.0, 359.0), Turn::SlightLeft);
        assert_eq!(classify_turn(0.0, 315.0), Turn::Left);
        assert_eq!(classify_turn(0.0, 240.0), Turn::SharpLeft);
        assert_eq!(classify_turn(100.0, 60.0), Turn::SlightLeft);
    }

    #[test]
    fn reversal_is_sharp_left() {
        assert_eq!(classify_turn(10.0, 190.0), Turn::SharpLeft);
        assert_eq!(classify_turn(190.0, 10.0), Turn::SharpLeft);
    }

    #[test]
    fn wraps_across_north() {
        assert_eq!(classify_turn(350.0, 10.0), Turn::SlightRight);
        assert_eq!(classify_turn(10.0, 350.0), Turn::SlightLeft);
        assert_eq!(classify_turn(300.0, 30.0), Turn::Right);
    }

    #[test]
    fn phrases() {
        assert_eq!(Turn::Straight.phrase(), "Continue straight");
        assert_eq!(Turn::SlightRight.to_string(), "Turn slight right");
        assert_eq!(Turn::Left.to_string(), "Turn left");
        assert_eq!(Turn::SharpLeft.to_string(), "Turn sharp left");
    }
}

// ── Line formatting ───────────────────────────────────────────────────────────

#[cfg(test)]
mod formatter {
    use super::helpers::{hanita, seg, zigzag};
    use crate::{RouteFormatter, TravelMode, Turn};
    use wr_route::GeoFeature;

    #[test]
    fn hanita_sharp_left_walk() {
        let f = hanita();
        approx::assert_abs_diff_eq!(f.start_heading(), 180.0, epsilon = 1e-9);
        assert_eq!(RouteFormatter::walking_minutes(f.length(), 20.0), 45);
        assert_eq!(
            RouteFormatter::walking().format_feature_line(&f, 0.0),
            "Turn sharp left onto Hanita and walk for 45 minutes.\n"
        );
    }

    #[test]
    fn reversal_from_ten_degrees_walk() {
        // South-southwest, heading ≈ 190°, ≈ 2.25 km.
        let f = GeoFeature::new(seg("Hanita", (19_980, 4_171), (0, 0)));
        approx::assert_abs_diff_eq!(f.start_heading(), 190.0, epsilon = 0.01);
        approx::assert_abs_diff_eq!(f.length(), 2.25, epsilon = 1e-3);
        assert_eq!(
            RouteFormatter::walking().format_feature_line(&f, 10.0),
            "Turn sharp left onto Hanita and walk for 45 minutes.\n"
        );
    }

    #[test]
    fn straight_entry_never_slight() {
        let f = hanita();
        let line = RouteFormatter::walking().format_feature_line(&f, f.start_heading());
        assert_eq!(line, "Continue straight onto Hanita and walk for 45 minutes.\n");
    }

    #[test]
    fn singular_minute() {
        let f = GeoFeature::new(seg("Short", (0, 0), (451, 0)));
        assert_eq!(
            RouteFormatter::walking().format_feature_line(&f, 0.0),
            "Continue straight onto Short and walk for 1 minute.\n"
        );
    }

    #[test]
    fn zero_length_feature() {
        let f = GeoFeature::new(seg("Dot", (7, 7), (7, 7)));
        assert_eq!(
            RouteFormatter::walking().format_feature_line(&f, 90.0),
            "Turn left onto Dot and walk for 0 minutes.\n"
        );
    }

    #[test]
    fn minutes_round_to_nearest() {
        assert_eq!(RouteFormatter::walking_minutes(0.124, 20.0), 2);
        assert_eq!(RouteFormatter::walking_minutes(0.126, 20.0), 3);
        assert_eq!(RouteFormatter::walking_minutes(0.125, 20.0), 3);
        assert_eq!(RouteFormatter::walking_minutes(0.0, 20.0), 0);
    }

    #[test]
    fn driving_line() {
        let line = RouteFormatter::driving().format_feature_line(&hanita(), 180.0);
        assert_eq!(line, "Continue straight onto Hanita and go 2.2 kilometers.\n");
        let precise = RouteFormatter::Driving { decimals: 3 }.format_feature_line(&hanita(), 90.0);
        assert_eq!(precise, "Turn right onto Hanita and go 2.250 kilometers.\n");
    }

    #[test]
    fn custom_pace() {
        let slow = RouteFormatter::Walking { minutes_per_km: 30.0 };
        assert!(slow.format_feature_line(&hanita(), 180.0).ends_with("walk for 67 minutes.\n"));
    }

    #[test]
    fn mode_of_variant() {
        assert_eq!(RouteFormatter::walking().mode(), TravelMode::Walking);
        assert_eq!(RouteFormatter::driving().mode(), TravelMode::Driving);
        assert_eq!(RouteFormatter::default(), RouteFormatter::walking());
    }

    #[test]
    fn route_lines_chain_end_headings() {
        let text = RouteFormatter::walking().format_route_from_start(&zigzag());
        assert_eq!(
            text,
            "Continue straight onto A and walk for 4 minutes.\n\
             Turn right onto B and walk for 4 minutes.\n\
             Turn left onto A and walk for 2 minutes.\n"
        );
    }

    #[test]
    fn route_uses_caller_heading_for_first_line() {
        let text = RouteFormatter::walking().format_route(&zigzag(), 90.0);
        assert!(text.starts_with("Turn left onto A"), "{text}");
        assert_eq!(text.lines().count(), 3);
        assert!(text.ends_with(".\n"));
    }

    #[test]
    fn instructions_carry_values() {
        let route = zigzag();
        let ins = RouteFormatter::driving().instructions(&route, 0.0);
        let turns: Vec<_> = ins.iter().map(|i| i.turn).collect();
        assert_eq!(turns, [Turn::Straight, Turn::Right, Turn::Left]);
        let names: Vec<_> = ins.iter().map(|i| i.feature_name.as_str()).collect();
        assert_eq!(names, ["A", "B", "A"]);
        let total: f64 = ins.iter().map(|i| i.length_km).sum();
        approx::assert_abs_diff_eq!(total, route.length(), epsilon = 1e-6);
        assert_eq!(ins[0].text, "Continue straight onto A and go 0.2 kilometers.\n");
    }

    #[test]
    fn lines_have_no_stray_whitespace() {
        for line in RouteFormatter::walking().format_route(&zigzag(), 0.0).split_inclusive('\n') {
            assert!(line.ends_with(".\n"));
            assert_eq!(line.trim_start(), line);
            assert!(!line.contains("  "));
        }
    }
}

// ── Configuration ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod config {
    use crate::{DirectionsConfig, DirectionsError, RouteFormatter, TravelMode};

    #[test]
    fn default_is_walking_twenty() {
        let cfg = DirectionsConfig::default();
        assert_eq!(cfg.mode, TravelMode::Walking);
        assert_eq!(cfg.formatter().unwrap(), RouteFormatter::walking());
    }

    #[test]
    fn driving_selected() {
        let cfg = DirectionsConfig {
            mode: TravelMode::Driving,
            driving_decimals: 2,
            ..DirectionsConfig::default()
        };
        assert_eq!(cfg.formatter().unwrap(), RouteFormatter::Driving { decimals: 2 });
    }

    #[test]
    fn invalid_pace_rejected() {
        for pace in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let cfg = DirectionsConfig { walking_minutes_per_km: pace, ..Default::default() };
            assert!(matches!(cfg.formatter(), Err(DirectionsError::InvalidSpeed(_))));
        }
    }

    #[test]
    fn driving_decimals_capped() {
        let ok = DirectionsConfig {
            driving_decimals: DirectionsConfig::MAX_DRIVING_DECIMALS,
            ..Default::default()
        };
        assert!(ok.validate().is_ok());
        let too_many = DirectionsConfig { driving_decimals: 4_000_000_000, ..Default::default() };
        assert!(matches!(
            too_many.formatter(),
            Err(DirectionsError::InvalidDecimals(4_000_000_000))
        ));
    }

    #[test]
    fn mode_from_str() {
        assert_eq!("walking".parse::<TravelMode>().unwrap(), TravelMode::Walking);
        assert_eq!(" Drive ".parse::<TravelMode>().unwrap(), TravelMode::Driving);
        assert!(matches!(
            "teleport".parse::<TravelMode>(),
            Err(DirectionsError::UnknownMode(m)) if m == "teleport"
        ));
        assert_eq!(TravelMode::Driving.to_string(), "driving");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_partial_config() {
        let cfg = DirectionsConfig::from_json_str(r#"{"mode":"driving"}"#).unwrap();
        assert_eq!(cfg.mode, TravelMode::Driving);
        assert_eq!(cfg.driving_decimals, 1);
        assert!(DirectionsConfig::from_json_str(r#"{"walking_minutes_per_km":-1}"#).is_err());
        assert!(matches!(
            DirectionsConfig::from_json_str("{"),
            Err(DirectionsError::Config(_))
        ));
        assert!(matches!(
            DirectionsConfig::from_json_str(r#"{"driving_decimals":4000000000}"#),
            Err(DirectionsError::InvalidDecimals(_))
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn formatter_serializes_by_mode() {
        let json = serde_json::to_string(&RouteFormatter::walking()).unwrap();
        assert_eq!(json, r#"{"walking":{"minutes_per_km":20.0}}"#);
    }
}
