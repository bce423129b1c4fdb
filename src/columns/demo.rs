//! Эталонный набор колонок census, собранный вручную
//!
//! Не зависит от схемы и сканера диапазонов: словари и границы заданы явно.

use crate::types::{BucketizedColumn, CategoricalColumn, CrossKey, DemoFeatureColumns, FeatureColumn};

const AGE_BOUNDARIES: [f64; 10] = [18.0, 25.0, 30.0, 35.0, 40.0, 45.0, 50.0, 55.0, 60.0, 65.0];

const DEMO_HASH_BUCKET_SIZE: usize = 1000;
const DEMO_EMBEDDING_DIM: usize = 32;

pub fn official_census_feature_columns_demo() -> DemoFeatureColumns {
    let gender = CategoricalColumn::vocabulary_list("gender", &["Female", "Male"]);
    let education = CategoricalColumn::vocabulary_list(
        "education",
        &[
            "Bachelors", "HS-grad", "11th", "Masters", "9th", "Some-college", "Assoc-acdm", "Assoc-voc",
            "7th-8th", "Doctorate", "Prof-school", "5th-6th", "10th", "1st-4th", "Preschool", "12th",
        ],
    );
    let marital_status = CategoricalColumn::vocabulary_list(
        "marital_status",
        &[
            "Married-civ-spouse", "Divorced", "Married-spouse-absent", "Never-married", "Separated",
            "Married-AF-spouse", "Widowed",
        ],
    );
    let relationship = CategoricalColumn::vocabulary_list(
        "relationship",
        &["Husband", "Not-in-family", "Wife", "Own-child", "Unmarried", "Other-relative"],
    );
    let workclass = CategoricalColumn::vocabulary_list(
        "workclass",
        &[
            "Self-emp-not-inc", "Private", "State-gov", "Federal-gov", "Local-gov", "?", "Self-emp-inc",
            "Without-pay", "Never-worked",
        ],
    );

    // Хэширование вместо словаря
    let native_country = CategoricalColumn::hash_bucket("native_country", DEMO_HASH_BUCKET_SIZE);
    let occupation = CategoricalColumn::hash_bucket("occupation", DEMO_HASH_BUCKET_SIZE);

    let age_buckets = BucketizedColumn::new("age", AGE_BOUNDARIES.to_vec());

    let base_columns = vec![
        gender.clone(),
        education.clone(),
        marital_status,
        relationship.clone(),
        workclass.clone(),
        occupation.clone(),
        native_country.clone(),
        CategoricalColumn::Bucketized(age_buckets.clone()),
    ];

    let crossed_columns = vec![
        CategoricalColumn::crossed(
            vec![CrossKey::raw("education"), CrossKey::raw("occupation")],
            DEMO_HASH_BUCKET_SIZE,
        ),
        CategoricalColumn::crossed(
            vec![
                CrossKey::Bucketized(age_buckets),
                CrossKey::raw("education"),
                CrossKey::raw("occupation"),
            ],
            DEMO_HASH_BUCKET_SIZE,
        ),
        CategoricalColumn::crossed(
            vec![CrossKey::raw("native_country"), CrossKey::raw("occupation")],
            DEMO_HASH_BUCKET_SIZE,
        ),
    ];

    let feature_columns = vec![
        FeatureColumn::indicator(workclass),
        FeatureColumn::indicator(education),
        FeatureColumn::indicator(gender),
        FeatureColumn::indicator(relationship),
        FeatureColumn::embedding(native_country, DEMO_EMBEDDING_DIM),
        FeatureColumn::embedding(occupation, DEMO_EMBEDDING_DIM),
        FeatureColumn::numeric("age"),
        FeatureColumn::numeric("education_num"),
        FeatureColumn::numeric("capital_gain"),
        FeatureColumn::numeric("capital_loss"),
        FeatureColumn::numeric("hours_per_week"),
    ];

    DemoFeatureColumns {
        feature_columns,
        base_columns,
        crossed_columns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FeatureKind;

    #[test]
    fn test_demo_shape() {
        let demo = official_census_feature_columns_demo();

        assert_eq!(demo.feature_columns.len(), 11);
        assert_eq!(demo.base_columns.len(), 8);
        assert_eq!(demo.crossed_columns.len(), 3);

        let count = |kind: FeatureKind| demo.feature_columns.iter().filter(|c| c.kind() == kind).count();
        assert_eq!(count(FeatureKind::Indicator), 4);
        assert_eq!(count(FeatureKind::Embedding), 2);
        assert_eq!(count(FeatureKind::Numeric), 5);
    }

    #[test]
    fn test_demo_vocabularies_and_buckets() {
        let demo = official_census_feature_columns_demo();

        assert_eq!(demo.base_columns[0].num_buckets(), 2);
        assert_eq!(demo.base_columns[1].num_buckets(), 16);
        assert_eq!(demo.base_columns[4].num_buckets(), 9);
        assert_eq!(demo.base_columns[7].name(), "age_bucketized");
        assert_eq!(demo.base_columns[7].num_buckets(), 11);
    }

    #[test]
    fn test_demo_crosses() {
        let demo = official_census_feature_columns_demo();
        let names: Vec<String> = demo.crossed_columns.iter().map(CategoricalColumn::name).collect();

        assert_eq!(
            names,
            vec![
                "education_X_occupation",
                "age_bucketized_X_education_X_occupation",
                "native_country_X_occupation",
            ]
        );
        assert!(demo.crossed_columns.iter().all(|c| c.num_buckets() == 1000));
    }
}
