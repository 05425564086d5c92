// SPDX-License-Identifier: Apache-2.0

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::test_utils::{config_test_logger, lock_defaults};
    use crate::{
        builtin_threshold, default_threshold, lower_bound, reset_default_thresholds,
        set_default_threshold, QaryError, QarySearch, SearchParameters, ThresholdConfig,
    };

    #[test]
    fn test_builtin_thresholds_are_twice_the_arity() {
        config_test_logger();
        let _guard = lock_defaults();
        reset_default_thresholds();

        for (arity, expected) in [(2, 4), (3, 6), (4, 8), (5, 10), (6, 12)] {
            assert_eq!(builtin_threshold(arity), expected);
            assert_eq!(default_threshold(arity).unwrap(), expected);
        }
        assert_eq!(SearchParameters::for_arity::<4>().to_linear_threshold, 8);
        assert_eq!(ThresholdConfig::default(), ThresholdConfig::current());
        assert_eq!(
            ThresholdConfig::default().to_linear_threshold,
            [4, 6, 8, 10, 12]
        );
    }

    #[test]
    fn test_set_default_threshold_affects_later_calls() {
        config_test_logger();
        let _guard = lock_defaults();
        reset_default_thresholds();

        let before = QarySearch::<3>::new();
        set_default_threshold(3, 40).unwrap();
        let after = QarySearch::<3>::new();

        // Searchers built earlier keep the value they read.
        assert_eq!(before.parameters().to_linear_threshold, 6);
        assert_eq!(after.parameters().to_linear_threshold, 40);
        assert_eq!(default_threshold(3).unwrap(), 40);
        // Other arities are untouched.
        assert_eq!(default_threshold(2).unwrap(), 4);

        // Results never depend on the threshold.
        let a: Vec<u32> = (0..500).map(|i| i / 2).collect();
        for q in [0u32, 1, 77, 249, 250, 1000] {
            assert_eq!(lower_bound::<3, _>(&a, &q), a.partition_point(|e| *e < q));
        }

        reset_default_thresholds();
        assert_eq!(default_threshold(3).unwrap(), 6);
    }

    #[test]
    fn test_unsupported_arity() {
        config_test_logger();

        for arity in [0, 1, 7, 100] {
            assert!(matches!(
                default_threshold(arity),
                Err(QaryError::UnsupportedArity(a)) if a == arity
            ));
            assert!(matches!(
                set_default_threshold(arity, 10),
                Err(QaryError::UnsupportedArity(_))
            ));
            assert!(ThresholdConfig::default().get(arity).is_err());
            assert!(ThresholdConfig::default().with_threshold(arity, 3).is_err());
        }
    }

    #[test]
    fn test_effective_threshold_never_below_arity() {
        config_test_logger();

        assert_eq!(SearchParameters::new(0).effective_threshold::<2>(), 2);
        assert_eq!(SearchParameters::new(3).effective_threshold::<5>(), 5);
        assert_eq!(SearchParameters::new(5).effective_threshold::<5>(), 5);
        assert_eq!(SearchParameters::new(30).effective_threshold::<6>(), 30);
    }

    #[test]
    fn test_threshold_config_from_lookup() {
        config_test_logger();

        let mut vars = HashMap::new();
        vars.insert("QARY_TO_LINEAR_THRESHOLD_3", " 24 ".to_string());
        vars.insert("QARY_TO_LINEAR_THRESHOLD_6", "0".to_string());
        vars.insert("QARY_TO_LINEAR_THRESHOLD_7", "not looked up".to_string());

        let config = ThresholdConfig::from_lookup(|key| vars.get(key).cloned()).unwrap();
        assert_eq!(config.get(2).unwrap(), 4);
        assert_eq!(config.get(3).unwrap(), 24);
        assert_eq!(config.get(6).unwrap(), 0);

        vars.insert("QARY_TO_LINEAR_THRESHOLD_4", "-8".to_string());
        match ThresholdConfig::from_lookup(|key| vars.get(key).cloned()) {
            Err(QaryError::InvalidThreshold { key, value }) => {
                assert_eq!(key, "QARY_TO_LINEAR_THRESHOLD_4");
                assert_eq!(value, "-8");
            }
            other => panic!("expected InvalidThreshold, got {:?}", other),
        }
    }

    #[test]
    fn test_threshold_config_install() {
        config_test_logger();
        let _guard = lock_defaults();

        let config = ThresholdConfig::default()
            .with_threshold(2, 16)
            .unwrap()
            .with_threshold(5, 1)
            .unwrap();
        config.install();

        assert_eq!(ThresholdConfig::current(), config);
        assert_eq!(SearchParameters::for_arity::<2>().to_linear_threshold, 16);
        assert_eq!(SearchParameters::for_arity::<5>().to_linear_threshold, 1);

        let a = [1, 2, 2, 2, 3, 5, 8, 13, 21, 34, 55, 89];
        assert_eq!(lower_bound::<5, _>(&a, &2), 1);
        assert_eq!(lower_bound::<2, _>(&a, &34), 9);

        reset_default_thresholds();
        assert_eq!(ThresholdConfig::current(), ThresholdConfig::default());
    }

    #[test]
    fn test_threshold_config_from_env() {
        config_test_logger();

        // Only this test touches the arity-5 variable.
        std::env::set_var("QARY_TO_LINEAR_THRESHOLD_5", "33");
        let config = ThresholdConfig::from_env();
        std::env::remove_var("QARY_TO_LINEAR_THRESHOLD_5");
        let config = config.unwrap();
        assert_eq!(config.get(5).unwrap(), 33);

        std::env::set_var("QARY_TO_LINEAR_THRESHOLD_5", "thirty");
        let result = ThresholdConfig::from_env();
        std::env::remove_var("QARY_TO_LINEAR_THRESHOLD_5");
        assert!(matches!(
            result,
            Err(QaryError::InvalidThreshold { ref key, .. }) if key == "QARY_TO_LINEAR_THRESHOLD_5"
        ));
    }

    #[test]
    fn test_parameters_and_config_serde() {
        config_test_logger();

        let params = SearchParameters::new(21);
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"to_linear_threshold":21}"#);
        let parsed: SearchParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, params);

        let config = ThresholdConfig::default().with_threshold(4, 64).unwrap();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"to_linear_threshold":[4,6,64,10,12]}"#);
        let parsed: ThresholdConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);

        // Wrong number of arities is rejected.
        assert!(
            serde_json::from_str::<ThresholdConfig>(r#"{"to_linear_threshold":[4,6]}"#).is_err()
        );
    }
}
