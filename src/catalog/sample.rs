//! Built-in sample catalogue

use async_trait::async_trait;

use super::{
    CategorySummary, DifficultyCount, ExampleView, ProblemCard, ProblemCatalog, ProblemDetail,
    ProblemFilter, SolutionView,
};
use crate::{
    error::AppResult,
    models::{ApproachLevel, Difficulty},
};

const PATTERNS: &[(&str, u32)] = &[
    ("Arrays & Hashing", 45),
    ("Two Pointers", 32),
    ("Sliding Window", 28),
    ("Binary Search", 25),
    ("Divide & Conquer", 18),
    ("Prefix Sums", 22),
    ("Greedy", 30),
    ("Backtracking", 26),
    ("Recursion", 24),
    ("Trees", 38),
    ("Graphs", 42),
    ("Dynamic Programming", 48),
];

const COMPANIES: &[(&str, u32)] = &[
    ("Google", 156),
    ("Amazon", 142),
    ("Meta", 128),
    ("Microsoft", 134),
    ("Apple", 98),
    ("Adobe", 76),
    ("Goldman Sachs", 64),
    ("Infosys", 52),
    ("TCS", 48),
    ("Zoho", 42),
];

const DIFFICULTIES: &[(Difficulty, u32)] = &[
    (Difficulty::Easy, 127),
    (Difficulty::Medium, 312),
    (Difficulty::Hard, 144),
];

/// (slug, title, difficulty, pattern, companies)
const PROBLEMS: &[(&str, &str, Difficulty, &str, &[&str])] = &[
    ("two-sum", "Two Sum", Difficulty::Easy, "Arrays & Hashing", &["Amazon", "Google"]),
    ("group-anagrams", "Group Anagrams", Difficulty::Medium, "Arrays & Hashing", &["Meta"]),
    (
        "subarray-sum-equals-k",
        "Subarray Sum Equals K",
        Difficulty::Medium,
        "Arrays & Hashing",
        &["Facebook", "Google"],
    ),
    (
        "container-with-most-water",
        "Container With Most Water",
        Difficulty::Medium,
        "Two Pointers",
        &["Amazon"],
    ),
    ("three-sum", "3Sum", Difficulty::Medium, "Two Pointers", &["Amazon", "Microsoft"]),
];

const TWO_SUM_STATEMENT: &str = "Given an array of integers nums and an integer target, return indices of the two numbers such that they add up to target.

You may assume that each input would have exactly one solution, and you may not use the same element twice.

You can return the answer in any order.";

const TWO_SUM_HINTS: &[&str] = &[
    "Think about how you can avoid checking the same pair of numbers twice.",
    "Consider using a data structure that allows you to check if a number exists in constant time.",
    "For each number, calculate what its complement would be (target - current number). Have you seen this complement before?",
    "A HashMap can store numbers you've already seen. As you iterate through the array, check if the complement exists in the HashMap.",
];

const TWO_SUM_BRUTE_FORCE: &str = "public int[] twoSum(int[] nums, int target) {
    for (int i = 0; i < nums.length; i++) {
        for (int j = i + 1; j < nums.length; j++) {
            if (nums[i] + nums[j] == target) {
                return new int[] { i, j };
            }
        }
    }
    return new int[] {};
}";

const TWO_SUM_TWO_POINTER: &str = "public int[] twoSum(int[] nums, int target) {
    int[][] numsWithIndex = new int[nums.length][2];
    for (int i = 0; i < nums.length; i++) {
        numsWithIndex[i] = new int[] { nums[i], i };
    }

    Arrays.sort(numsWithIndex, (a, b) -> a[0] - b[0]);

    int left = 0, right = nums.length - 1;

    while (left < right) {
        int sum = numsWithIndex[left][0] + numsWithIndex[right][0];

        if (sum == target) {
            return new int[] {
                numsWithIndex[left][1],
                numsWithIndex[right][1]
            };
        } else if (sum < target) {
            left++;
        } else {
            right--;
        }
    }

    return new int[] {};
}";

const TWO_SUM_HASHMAP: &str = "public int[] twoSum(int[] nums, int target) {
    Map<Integer, Integer> map = new HashMap<>();

    for (int i = 0; i < nums.length; i++) {
        int complement = target - nums[i];

        if (map.containsKey(complement)) {
            return new int[] { map.get(complement), i };
        }

        map.put(nums[i], i);
    }

    return new int[] {};
}";

/// Catalogue backed by hard-coded sample content
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog;

impl StaticCatalog {
    pub fn new() -> Self {
        Self
    }

    fn cards() -> impl Iterator<Item = ProblemCard> {
        PROBLEMS.iter().map(|&(slug, title, difficulty, pattern, companies)| ProblemCard {
            slug: slug.to_string(),
            title: title.to_string(),
            difficulty,
            patterns: vec![pattern.to_string()],
            companies: companies.iter().map(|c| c.to_string()).collect(),
        })
    }

    fn two_sum_content(detail: &mut ProblemDetail) {
        detail.problem_statement = TWO_SUM_STATEMENT.to_string();
        detail.tags = vec!["Arrays".to_string(), "Hashing".to_string()];
        detail.examples = vec![
            ExampleView {
                input: "nums = [2,7,11,15], target = 9".to_string(),
                output: "[0,1]".to_string(),
                explanation: Some("Because nums[0] + nums[1] == 9, we return [0, 1].".to_string()),
            },
            ExampleView {
                input: "nums = [3,2,4], target = 6".to_string(),
                output: "[1,2]".to_string(),
                explanation: Some("Because nums[1] + nums[2] == 6, we return [1, 2].".to_string()),
            },
        ];
        detail.constraints = [
            "2 <= nums.length <= 10⁴",
            "-10⁹ <= nums[i] <= 10⁹",
            "-10⁹ <= target <= 10⁹",
            "Only one valid answer exists.",
        ]
        .iter()
        .map(|c| c.to_string())
        .collect();
        detail.hints = TWO_SUM_HINTS.iter().map(|h| h.to_string()).collect();
        detail.solutions = vec![
            solution(
                ApproachLevel::Good,
                "Brute Force",
                "Use nested loops to check every pair of numbers. Simple but inefficient for large inputs.",
                "O(n²)",
                "O(1)",
                TWO_SUM_BRUTE_FORCE,
            ),
            solution(
                ApproachLevel::Better,
                "Two-Pointer (Sorted)",
                "Sort the array and use two pointers from both ends. Better than brute force but sorting adds overhead.",
                "O(n log n)",
                "O(n)",
                TWO_SUM_TWO_POINTER,
            ),
            solution(
                ApproachLevel::Best,
                "HashMap (Optimal)",
                "Use a HashMap to store complements for constant lookup time. This is the optimal solution with linear time complexity.",
                "O(n)",
                "O(n)",
                TWO_SUM_HASHMAP,
            ),
        ];
    }
}

fn solution(
    approach_level: ApproachLevel,
    title: &str,
    description: &str,
    time_complexity: &str,
    space_complexity: &str,
    java_code: &str,
) -> SolutionView {
    SolutionView {
        approach_level,
        title: title.to_string(),
        description: description.to_string(),
        time_complexity: time_complexity.to_string(),
        space_complexity: space_complexity.to_string(),
        java_code: Some(java_code.to_string()),
        cpp_code: None,
        python_code: None,
    }
}

#[async_trait]
impl ProblemCatalog for StaticCatalog {
    async fn list_patterns(&self) -> AppResult<Vec<CategorySummary>> {
        Ok(PATTERNS.iter().map(|&(name, count)| CategorySummary::new(name, count)).collect())
    }

    async fn list_companies(&self) -> AppResult<Vec<CategorySummary>> {
        Ok(COMPANIES.iter().map(|&(name, count)| CategorySummary::new(name, count)).collect())
    }

    async fn difficulty_counts(&self) -> AppResult<Vec<DifficultyCount>> {
        Ok(DIFFICULTIES
            .iter()
            .map(|&(difficulty, problem_count)| DifficultyCount {
                difficulty,
                label: difficulty.label().to_string(),
                problem_count,
            })
            .collect())
    }

    async fn list_problems(&self, filter: &ProblemFilter) -> AppResult<Vec<ProblemCard>> {
        Ok(Self::cards().filter(|card| filter.matches(card)).collect())
    }

    async fn problem_detail(&self, slug: &str) -> AppResult<Option<ProblemDetail>> {
        let Some(card) = Self::cards().find(|c| c.slug == slug) else {
            return Ok(None);
        };

        let mut detail = ProblemDetail {
            slug: card.slug,
            title: card.title,
            difficulty: card.difficulty,
            problem_statement: String::new(),
            constraints: Vec::new(),
            examples: Vec::new(),
            hints: Vec::new(),
            solutions: Vec::new(),
            tags: Vec::new(),
            patterns: card.patterns,
            companies: card.companies,
        };

        if slug == "two-sum" {
            Self::two_sum_content(&mut detail);
        }

        Ok(Some(detail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lists() {
        let catalog = StaticCatalog::new();

        let patterns = catalog.list_patterns().await.unwrap();
        assert_eq!(patterns.len(), 12);
        assert_eq!(patterns[0].slug, "arrays-hashing");
        assert_eq!(patterns[0].problem_count, 45);

        let companies = catalog.list_companies().await.unwrap();
        assert_eq!(companies.len(), 10);
        assert!(companies.iter().any(|c| c.slug == "goldman-sachs"));

        let counts = catalog.difficulty_counts().await.unwrap();
        let totals: Vec<u32> = counts.iter().map(|c| c.problem_count).collect();
        assert_eq!(totals, vec![127, 312, 144]);
        assert_eq!(counts[1].label, "Medium");
    }

    #[tokio::test]
    async fn test_list_problems_filters() {
        let catalog = StaticCatalog::new();

        let all = catalog.list_problems(&ProblemFilter::default()).await.unwrap();
        assert_eq!(all.len(), 5);

        let two_pointers = catalog
            .list_problems(&ProblemFilter {
                pattern: Some("two-pointers".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        let slugs: Vec<&str> = two_pointers.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, vec!["container-with-most-water", "three-sum"]);

        let google_medium = catalog
            .list_problems(&ProblemFilter {
                company: Some("google".to_string()),
                difficulty: Some(Difficulty::Medium),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(google_medium.len(), 1);
        assert_eq!(google_medium[0].slug, "subarray-sum-equals-k");
    }

    #[tokio::test]
    async fn test_two_sum_detail() {
        let detail = StaticCatalog::new().problem_detail("two-sum").await.unwrap().unwrap();

        assert_eq!(detail.title, "Two Sum");
        assert_eq!(detail.examples.len(), 2);
        assert_eq!(detail.constraints.len(), 4);
        assert_eq!(detail.hints.len(), 4);
        let levels: Vec<ApproachLevel> = detail.solutions.iter().map(|s| s.approach_level).collect();
        assert_eq!(levels, ApproachLevel::ALL.to_vec());
        assert_eq!(detail.solutions[2].time_complexity, "O(n)");
    }

    #[tokio::test]
    async fn test_unknown_slug() {
        assert!(StaticCatalog::new().problem_detail("nope").await.unwrap().is_none());
    }
}
