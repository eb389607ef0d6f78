//! Helpers shared by the member tables: ordering, counts, and the birth-year
//! field of the member form.

use std::cmp::Ordering;

use crate::{HistoryEntry, Member, MemberStatus};

/// Rows that can be ordered by birth year, then name
pub trait BirthNamed {
    fn birth_date(&self) -> Option<&str>;
    fn display_name(&self) -> &str;
}

impl BirthNamed for MemberStatus {
    fn birth_date(&self) -> Option<&str> {
        self.birth_date.as_deref()
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

impl BirthNamed for Member {
    fn birth_date(&self) -> Option<&str> {
        self.birth_date.as_deref()
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

impl BirthNamed for HistoryEntry {
    fn birth_date(&self) -> Option<&str> {
        self.birth_date.as_deref()
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

fn compare_birth_name<T: BirthNamed>(a: &T, b: &T) -> Ordering {
    a.birth_date()
        .unwrap_or("")
        .cmp(b.birth_date().unwrap_or(""))
        .then_with(|| a.display_name().cmp(b.display_name()))
}

/// Sorted copy: oldest first when `ascending`, members without a birth year
/// leading. Descending is the exact reverse.
pub fn sort_by_birth_name<T: BirthNamed + Clone>(rows: &[T], ascending: bool) -> Vec<T> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare_birth_name(a, b);
        if ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });
    sorted
}

/// "1994년", or "-" when unknown
pub fn birth_label(birth_date: Option<&str>) -> String {
    match birth_date {
        Some(birth) if !birth.trim().is_empty() => format!("{}년", birth.trim()),
        _ => "-".to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemberCounts {
    pub total: usize,
    pub active: usize,
    pub left: usize,
}

pub fn member_counts(members: &[Member]) -> MemberCounts {
    let active = members.iter().filter(|m| m.is_active).count();
    MemberCounts {
        total: members.len(),
        active,
        left: members.len() - active,
    }
}

/// Validate the optional birth-year field of the member form
pub fn parse_birth_year(input: &str) -> Result<Option<i32>, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    match input.parse::<i32>() {
        Ok(year) if (1900..=2100).contains(&year) => Ok(Some(year)),
        _ => Err(format!("생년은 4자리 연도로 입력하세요: {}", input)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: &str, birth: Option<&str>, active: bool) -> Member {
        Member {
            id: 0,
            name: name.to_string(),
            birth_date: birth.map(str::to_string),
            is_active: active,
            left_date: None,
            left_reason: None,
            created_at: None,
        }
    }

    #[test]
    fn test_sort_by_birth_then_name() {
        let rows = vec![
            member("장영범", Some("1996"), true),
            member("김용진", Some("1994"), true),
            member("가나다", Some("1996"), true),
            member("무명", None, true),
        ];

        let names: Vec<_> = sort_by_birth_name(&rows, true).into_iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["무명", "김용진", "가나다", "장영범"]);

        let names: Vec<_> = sort_by_birth_name(&rows, false).into_iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["장영범", "가나다", "김용진", "무명"]);
    }

    #[test]
    fn test_member_counts() {
        let rows = vec![
            member("a", None, true),
            member("b", None, false),
            member("c", None, true),
        ];
        assert_eq!(
            member_counts(&rows),
            MemberCounts {
                total: 3,
                active: 2,
                left: 1
            }
        );
        assert_eq!(member_counts(&[]), MemberCounts::default());
    }

    #[test]
    fn test_birth_label() {
        assert_eq!(birth_label(Some("1994")), "1994년");
        assert_eq!(birth_label(Some("")), "-");
        assert_eq!(birth_label(None), "-");
    }

    #[test]
    fn test_parse_birth_year() {
        assert_eq!(parse_birth_year(""), Ok(None));
        assert_eq!(parse_birth_year(" 1994 "), Ok(Some(1994)));
        assert!(parse_birth_year("94년").is_err());
        assert!(parse_birth_year("1850").is_err());
    }
}
