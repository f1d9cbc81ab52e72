use super::*;

fn cat(rank: u32, label: &str) -> Category {
    Category {
        id: CategoryId(rank),
        label: label.to_string(),
    }
}

fn dictionary() -> CategoryDictionary {
    CategoryDictionary::new(vec![
        cat(1, "DAPI"),
        cat(2, "GFP"),
        cat(3, "RFP"),
        cat(4, "Cy5"),
    ])
    .unwrap()
}

#[test]
fn test_primary_is_rank_one_regardless_of_position() {
    let dict = CategoryDictionary::new(vec![cat(2, "GFP"), cat(1, "DAPI")]).unwrap();
    assert_eq!(dict.primary().label, "DAPI");
    assert_eq!(dict.primary_index(), 1);
    assert_eq!(dict.secondary_indices(), vec![0]);
}

#[test]
fn test_missing_primary_rejected() {
    let err = CategoryDictionary::new(vec![cat(2, "GFP"), cat(3, "RFP")]).unwrap_err();
    assert_eq!(err, DictionaryError::MissingPrimary);
}

#[test]
fn test_duplicates_rejected() {
    let err = CategoryDictionary::new(vec![cat(1, "DAPI"), cat(1, "GFP")]).unwrap_err();
    assert_eq!(err, DictionaryError::DuplicateRank(1));

    let err = CategoryDictionary::new(vec![cat(1, "DAPI"), cat(2, "DAPI")]).unwrap_err();
    assert_eq!(err, DictionaryError::DuplicateLabel("DAPI".to_string()));

    let err = CategoryDictionary::new(vec![cat(1, "")]).unwrap_err();
    assert_eq!(err, DictionaryError::EmptyLabel(1));
}

#[test]
fn test_pairs_are_unordered_and_exclude_primary() {
    let dict = dictionary();
    assert_eq!(dict.secondary_pairs(), vec![(1, 2), (1, 3), (2, 3)]);
}

#[test]
fn test_permutations_cover_both_directions() {
    let dict = dictionary();
    let perms = dict.secondary_permutations();
    assert_eq!(perms.len(), 2 * dict.secondary_pairs().len());
    assert_eq!(perms[0], (1, 2));
    assert!(perms.contains(&(2, 1)));
    assert!(perms.iter().all(|&(a, b)| a != 0 && b != 0));
}

#[test]
fn test_code_is_decimal_rank() {
    assert_eq!(CategoryId(12).code(), "12");
}
