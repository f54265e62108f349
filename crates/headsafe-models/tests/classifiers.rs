use headsafe_models::{
    BoostedTrees, Classifier, DecisionTree, FeatureScaler, Kernel, LogisticRegression, ModelKind,
    RandomForest, SupportVectorClassifier, TreeNode,
};

const ROW: [f64; 5] = [2.0, 0.5, 0.5, 2.0, 1.0];

fn stump(feature: usize, threshold: f64, left: f64, right: f64) -> DecisionTree {
    DecisionTree::new(vec![
        TreeNode::Split {
            feature,
            threshold,
            left: 1,
            right: 2,
        },
        TreeNode::Leaf(left),
        TreeNode::Leaf(right),
    ])
    .expect("valid stump")
}

#[test]
fn logistic_regression_with_zero_margin_is_one_half() {
    let model = LogisticRegression {
        coef: [0.0; 5],
        intercept: 0.0,
    };
    assert_eq!(model.predict_proba(&ROW), 0.5);
    assert_eq!(model.kind(), ModelKind::LogisticRegression);
}

#[test]
fn logistic_regression_weights_follow_slot_order() {
    let model = LogisticRegression {
        coef: [0.0, 0.0, 0.0, 0.0, 3.0],
        intercept: -3.0,
    };
    // header_type = 1 cancels the intercept.
    assert_eq!(model.predict_proba(&ROW), 0.5);
    assert!(model.predict_proba(&[2.0, 0.5, 0.5, 2.0, 2.0]) > 0.9);
}

#[test]
fn random_forest_averages_leaf_fractions() {
    let forest = RandomForest {
        trees: vec![stump(0, 2.0, 0.2, 0.8), stump(0, 1.0, 0.4, 1.0)],
    };
    // dist_before = 2.0 goes left on `<= 2.0`, right on `<= 1.0`.
    let p = forest.predict_proba(&ROW);
    assert!((p - 0.6).abs() < 1e-12, "got {p}");
}

#[test]
fn boosted_trees_split_strictly_below_threshold() {
    let model = BoostedTrees {
        base_margin: 0.0,
        trees: vec![stump(0, 2.0, -10.0, 10.0)],
    };
    // 2.0 < 2.0 is false, so the right leaf applies.
    assert!(model.predict_proba(&ROW) > 0.99);
    assert_eq!(model.kind(), ModelKind::XgBoost);
}

#[test]
fn boosted_trees_without_trees_use_base_margin() {
    let model = BoostedTrees {
        base_margin: 0.0,
        trees: Vec::new(),
    };
    assert_eq!(model.predict_proba(&ROW), 0.5);
}

#[test]
fn svm_applies_platt_scaling_to_decision_value() {
    let model = SupportVectorClassifier {
        kernel: Kernel::Linear,
        support_vectors: vec![[0.0, 0.0, 0.0, 0.0, 1.0]],
        dual_coef: vec![2.0],
        intercept: -2.0,
        prob_a: -1.0,
        prob_b: 0.0,
    };
    // f = 2 * 1 - 2 = 0 -> 1 / (1 + e^0)
    assert_eq!(model.decision_function(&ROW), 0.0);
    assert_eq!(model.predict_proba(&ROW), 0.5);
}

#[test]
fn svm_rbf_kernel_is_one_at_the_support_vector() {
    let model = SupportVectorClassifier {
        kernel: Kernel::Rbf { gamma: 0.5 },
        support_vectors: vec![ROW],
        dual_coef: vec![1.5],
        intercept: 0.0,
        prob_a: -2.0,
        prob_b: 0.0,
    };
    assert!((model.decision_function(&ROW) - 1.5).abs() < 1e-12);
    assert!(model.predict_proba(&ROW) > 0.9);
}

#[test]
fn svm_poly_kernel_raises_shifted_dot_product_to_degree() {
    let model = SupportVectorClassifier {
        kernel: Kernel::Poly {
            gamma: 0.5,
            coef0: 1.0,
            degree: 2,
        },
        support_vectors: vec![[0.0, 0.0, 0.0, 0.0, 1.0]],
        dual_coef: vec![1.0],
        intercept: -2.25,
        prob_a: -1.0,
        prob_b: 0.0,
    };
    // dot = 1, (0.5 * 1 + 1)^2 = 2.25
    assert!(model.decision_function(&ROW).abs() < 1e-12);
    assert!((model.predict_proba(&ROW) - 0.5).abs() < 1e-12);

    let far = [0.0, 0.0, 0.0, 0.0, 3.0];
    // (0.5 * 3 + 1)^2 - 2.25 = 4.0
    assert!((model.decision_function(&far) - 4.0).abs() < 1e-12);
}

#[test]
fn svm_sigmoid_kernel_is_tanh_of_shifted_dot_product() {
    let model = SupportVectorClassifier {
        kernel: Kernel::Sigmoid {
            gamma: 0.5,
            coef0: -1.0,
        },
        support_vectors: vec![[1.0, 0.0, 0.0, 0.0, 0.0]],
        dual_coef: vec![2.0],
        intercept: 0.25,
        prob_a: -1.0,
        prob_b: 0.0,
    };
    // dot = 2, tanh(0.5 * 2 - 1) = 0
    assert!((model.decision_function(&ROW) - 0.25).abs() < 1e-12);

    let far = [4.0, 0.0, 0.0, 0.0, 0.0];
    let expected = 2.0 * 1.0_f64.tanh() + 0.25;
    assert!((model.decision_function(&far) - expected).abs() < 1e-12);
    let p = 1.0 / (1.0 + (-expected).exp());
    assert!((model.predict_proba(&far) - p).abs() < 1e-12);
}

#[test]
fn tree_construction_rejects_backward_and_dangling_children() {
    let backward = DecisionTree::new(vec![
        TreeNode::Leaf(0.1),
        TreeNode::Split {
            feature: 0,
            threshold: 1.0,
            left: 0,
            right: 2,
        },
        TreeNode::Leaf(0.2),
    ]);
    assert!(backward.is_err());

    let dangling = DecisionTree::new(vec![TreeNode::Split {
        feature: 0,
        threshold: 1.0,
        left: 1,
        right: 5,
    }]);
    assert!(dangling.is_err());

    let bad_feature = DecisionTree::new(vec![
        TreeNode::Split {
            feature: 5,
            threshold: 1.0,
            left: 1,
            right: 2,
        },
        TreeNode::Leaf(0.0),
        TreeNode::Leaf(1.0),
    ]);
    assert!(bad_feature.is_err());
    assert!(DecisionTree::new(Vec::new()).is_err());
}

#[test]
fn standard_scaler_centers_and_scales_each_slot() {
    let scaler = FeatureScaler::Standard {
        mean: [2.0, 0.5, 0.5, 2.0, 1.0],
        scale: [2.0, 0.25, 0.25, 2.0, 0.0],
    };
    let out = scaler.transform(&[4.0, 1.0, 0.0, 2.0, 2.0]);
    assert_eq!(out, [1.0, 2.0, -2.0, 0.0, 1.0]);
}

#[test]
fn min_max_scaler_preserves_order_and_width() {
    let scaler = FeatureScaler::MinMax {
        min: [0.0, 0.0, 0.0, 0.0, 0.0],
        scale: [0.1, 0.5, 0.5, 0.1, 0.5],
    };
    assert_eq!(
        scaler.transform(&[10.0, 2.0, 1.0, 5.0, 2.0]),
        [1.0, 1.0, 0.5, 0.5, 1.0]
    );
}

#[test]
fn model_kind_parses_display_names_and_file_stems() {
    assert_eq!("XGBoost".parse::<ModelKind>().unwrap(), ModelKind::XgBoost);
    assert_eq!("logisticregression".parse::<ModelKind>().unwrap(), ModelKind::LogisticRegression);
    assert_eq!("svm".parse::<ModelKind>().unwrap(), ModelKind::Svm);
    assert!("knn".parse::<ModelKind>().is_err());
}
