use std::{fmt::Display, io::Read, str::FromStr};

use anyhow::bail;
use introsort::{Counting, Reverse, SortStats, Sortable};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::DatasetError,
    person::{ByAge, ByName, Person},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Age,
    Name,
}

impl Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Age => "age",
            Self::Name => "name",
        })
    }
}

impl FromStr for SortKey {
    type Err = anyhow::Error;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Ok(match key {
            "age" => Self::Age,
            "name" => Self::Name,
            _ => bail!("Invalid sort key"),
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl FromStr for SortDirection {
    type Err = anyhow::Error;

    fn from_str(dir: &str) -> Result<Self, Self::Err> {
        Ok(match dir {
            "asc" => Self::Ascending,
            "desc" => Self::Descending,
            _ => bail!("Invalid sort direction"),
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    #[default]
    Text,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(format: &str) -> Result<Self, Self::Err> {
        Ok(match format {
            "json" => Self::Json,
            "text" => Self::Text,
            _ => bail!("Invalid output format"),
        })
    }
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dataset {
    Numbers(Vec<i64>),
    People(Vec<Person>),
}

impl Dataset {
    pub fn from_reader(mut reader: impl Read) -> Result<Self, DatasetError> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;

        Ok(serde_json::from_str(&input)?)
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Numbers(nums) => nums.len(),
            Self::People(people) => people.len(),
        }
    }

    /// Sorts the records in place
    ///
    /// People are sorted by age unless `key` says otherwise.
    /// Numbers have no key, so passing one is an error.
    pub fn sort(
        &mut self,
        key: Option<SortKey>,
        dir: SortDirection,
    ) -> Result<SortStats, DatasetError> {
        match (self, key) {
            (Self::Numbers(_), Some(key)) => Err(DatasetError::KeyMismatch(key)),
            (Self::Numbers(nums), None) => Ok(sort_counted(nums.as_mut_slice(), dir)),
            (Self::People(people), Some(SortKey::Name)) => Ok(sort_counted(ByName(people), dir)),
            (Self::People(people), Some(SortKey::Age) | None) => {
                Ok(sort_counted(ByAge(people), dir))
            }
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String, DatasetError> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Text => Ok(match self {
                Self::Numbers(nums) => join_lines(nums),
                Self::People(people) => join_lines(people),
            }),
        }
    }
}

fn join_lines<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

fn sort_counted<S: Sortable>(data: S, dir: SortDirection) -> SortStats {
    let stats = match dir {
        SortDirection::Ascending => {
            let mut counted = Counting::new(data);
            introsort::sort(&mut counted);
            counted.stats()
        }
        SortDirection::Descending => {
            let mut counted = Counting::new(Reverse(data));
            introsort::sort(&mut counted);
            counted.stats()
        }
    };

    debug!(?dir, comparisons = stats.comparisons, swaps = stats.swaps, "sorted");
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    const PEOPLE: &str = r#"[
        {"name": "Bob", "age": 31},
        {"name": "John", "age": 42},
        {"name": "Michael", "age": 17},
        {"name": "Jenny", "age": 26}
    ]"#;

    #[test]
    fn test_parse_numbers() {
        let dataset = Dataset::from_reader("[5, 3, 4, 1, 2]".as_bytes()).unwrap();
        assert_eq!(dataset, Dataset::Numbers(vec![5, 3, 4, 1, 2]));
    }

    #[test]
    fn test_parse_people() {
        let dataset = Dataset::from_reader(PEOPLE.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 4);
        assert!(matches!(dataset, Dataset::People(_)));
    }

    #[test]
    fn test_parse_invalid() {
        let err = Dataset::from_reader(r#"{"not": "a list"}"#.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::Json(_)));
    }

    #[test]
    fn test_sort_numbers() {
        let mut dataset = Dataset::Numbers(vec![5, 3, 4, 1, 2]);

        let stats = dataset.sort(None, SortDirection::Ascending).unwrap();

        assert_eq!(dataset, Dataset::Numbers(vec![1, 2, 3, 4, 5]));
        assert!(stats.comparisons > 0);
    }

    #[test]
    fn test_sort_numbers_descending() {
        let mut dataset = Dataset::Numbers((0..100).collect());

        dataset.sort(None, SortDirection::Descending).unwrap();

        assert_eq!(dataset, Dataset::Numbers((0..100).rev().collect()));
    }

    #[test]
    fn test_sort_numbers_with_key() {
        let mut dataset = Dataset::Numbers(vec![2, 1]);

        let err = dataset
            .sort(Some(SortKey::Name), SortDirection::Ascending)
            .unwrap_err();

        assert!(matches!(err, DatasetError::KeyMismatch(SortKey::Name)));
        assert_eq!(err.to_string(), "cannot sort numbers by `name`");
        assert_eq!(dataset, Dataset::Numbers(vec![2, 1]));
    }

    #[test]
    fn test_sort_people_defaults_to_age() {
        let mut dataset = Dataset::from_reader(PEOPLE.as_bytes()).unwrap();

        dataset.sort(None, SortDirection::Ascending).unwrap();

        assert_eq!(
            dataset.render(OutputFormat::Text).unwrap(),
            "Michael: 17\nJenny: 26\nBob: 31\nJohn: 42"
        );
    }

    #[test]
    fn test_sort_people_by_name_descending() {
        let mut dataset = Dataset::from_reader(PEOPLE.as_bytes()).unwrap();

        dataset
            .sort(Some(SortKey::Name), SortDirection::Descending)
            .unwrap();

        let Dataset::People(people) = dataset else {
            panic!("expected people");
        };
        let names: Vec<&str> = people.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Michael", "John", "Jenny", "Bob"]);
    }

    #[test]
    fn test_render_json_round_trips() {
        let dataset = Dataset::from_reader(PEOPLE.as_bytes()).unwrap();

        let json = dataset.render(OutputFormat::Json).unwrap();

        assert_eq!(Dataset::from_reader(json.as_bytes()).unwrap(), dataset);
    }

    #[test]
    fn test_parse_config_values() {
        assert_eq!("age".parse::<SortKey>().unwrap(), SortKey::Age);
        assert_eq!("desc".parse::<SortDirection>().unwrap(), SortDirection::Descending);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("height".parse::<SortKey>().is_err());
        assert!("up".parse::<SortDirection>().is_err());
    }
}
