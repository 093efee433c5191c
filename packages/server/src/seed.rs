use sea_orm::sea_query::Index;
use sea_orm::*;
use tracing::{info, warn};

use common::Difficulty;

use crate::entity::{problem, submission, test_case};

/// One entry of the built-in practice catalog.
struct SeedProblem {
    title: &'static str,
    description: &'static str,
    difficulty: Difficulty,
    example_input: &'static str,
    example_output: &'static str,
    starter_code: &'static str,
    test_cases: &'static [(&'static str, &'static str)],
}

/// Counts reported after a seeding pass.
pub struct SeedOutcome {
    pub created: u32,
    pub updated: u32,
}

/// Upsert the built-in catalog, keyed by title.
///
/// Existing catalog problems are refreshed in place and their test cases
/// replaced, so edits to the catalog propagate on the next run. Problems
/// created through the API are never touched.
pub async fn seed_problems(db: &DatabaseConnection) -> Result<SeedOutcome, DbErr> {
    let mut outcome = SeedOutcome {
        created: 0,
        updated: 0,
    };

    let txn = db.begin().await?;

    for entry in CATALOG {
        let now = chrono::Utc::now();

        let existing = problem::Entity::find()
            .filter(problem::Column::Title.eq(entry.title))
            .one(&txn)
            .await?;

        let problem_id = match existing {
            Some(model) => {
                let id = model.id;
                let mut active: problem::ActiveModel = model.into();
                active.description = Set(entry.description.to_string());
                active.difficulty = Set(entry.difficulty);
                active.example_input = Set(entry.example_input.to_string());
                active.example_output = Set(entry.example_output.to_string());
                active.starter_code = Set(entry.starter_code.to_string());
                active.updated_at = Set(now);
                active.update(&txn).await?;
                outcome.updated += 1;
                id
            }
            None => {
                let model = problem::ActiveModel {
                    title: Set(entry.title.to_string()),
                    description: Set(entry.description.to_string()),
                    difficulty: Set(entry.difficulty),
                    example_input: Set(entry.example_input.to_string()),
                    example_output: Set(entry.example_output.to_string()),
                    starter_code: Set(entry.starter_code.to_string()),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                }
                .insert(&txn)
                .await?;
                outcome.created += 1;
                model.id
            }
        };

        test_case::Entity::delete_many()
            .filter(test_case::Column::ProblemId.eq(problem_id))
            .exec(&txn)
            .await?;

        for (position, &(input, expected)) in entry.test_cases.iter().enumerate() {
            test_case::ActiveModel {
                problem_id: Set(problem_id),
                input: Set(input.to_string()),
                expected_output: Set(expected.to_string()),
                position: Set(position as i32),
                created_at: Set(now),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }
    }

    txn.commit().await?;

    info!(
        created = outcome.created,
        updated = outcome.updated,
        "Seeded problem catalog"
    );

    Ok(outcome)
}

/// Ensure required database indexes exist.
///
/// SeaORM's schema-sync doesn't support composite non-unique indexes,
/// so we create them manually on startup.
pub async fn ensure_indexes(db: &DatabaseConnection) -> Result<(), DbErr> {
    // Rate limiting:
    // SELECT COUNT(*) FROM submission WHERE user_id = ? AND created_at > ?
    let create = Index::create()
        .if_not_exists()
        .name("idx_submission_user_created")
        .table(submission::Entity)
        .col(submission::Column::UserId)
        .col(submission::Column::CreatedAt)
        .to_owned();

    match db
        .execute_raw(db.get_database_backend().build(&create))
        .await
    {
        Ok(_) => info!("Ensured index idx_submission_user_created exists"),
        Err(e) => warn!("Failed to create index idx_submission_user_created: {}", e),
    }

    // Submission listing and stats:
    // SELECT * FROM submission WHERE user_id = ? ORDER BY updated_at DESC
    let create = Index::create()
        .if_not_exists()
        .name("idx_submission_user_updated")
        .table(submission::Entity)
        .col(submission::Column::UserId)
        .col(submission::Column::UpdatedAt)
        .to_owned();

    match db
        .execute_raw(db.get_database_backend().build(&create))
        .await
    {
        Ok(_) => info!("Ensured index idx_submission_user_updated exists"),
        Err(e) => warn!("Failed to create index idx_submission_user_updated: {}", e),
    }

    Ok(())
}

const CATALOG: &[SeedProblem] = &[
    SeedProblem {
        title: "Two Sum",
        description: "Find two numbers that add up to the target.",
        difficulty: Difficulty::Easy,
        example_input: "[2,7,11,15], target = 9",
        example_output: "[0,1]",
        starter_code: r#"class Solution {
public:
    vector<int> twoSum(vector<int>& nums, int target) {
        // Write your code here
    }
};"#,
        test_cases: &[
            ("[2,7,11,15], target=9", "[0,1]"),
            ("[3,2,4], target=6", "[1,2]"),
            ("[1,5,3,7,9], target=10", "[2,3]"),
            ("[0,4,3,0], target=0", "[0,3]"),
            ("[1,-2,3,-4,-5], target=-6", "[1,3]"),
            ("[1,2,4,3,4,5], target=6", "[1,2]"),
            ("[5,25,75], target=100", "[1,2]"),
            ("[9,8,7,6,5], target=11", "[3,4]"),
            ("[10,20,10,40,50,60,70], target=50", "[0,3]"),
            ("[4,4], target=8", "[0,1]"),
        ],
    },
    SeedProblem {
        title: "Reverse Number",
        description: "Given an integer n, reverse its digits and return the reversed number. If n is negative, keep the sign.",
        difficulty: Difficulty::Medium,
        example_input: "123",
        example_output: "321",
        starter_code: r#"class Solution {
public:
    int reverseNumber(int n) {
        // Write your code here
    }
};"#,
        test_cases: &[
            ("123", "321"),
            ("400", "4"),
            ("-123", "-321"),
            ("0", "0"),
            ("1000", "1"),
            ("9876", "6789"),
            ("-9876", "-6789"),
            ("111", "111"),
            ("120", "21"),
            ("900090", "90009"),
        ],
    },
    SeedProblem {
        title: "Valid Parentheses",
        description: "Check if a string of parentheses is valid.",
        difficulty: Difficulty::Easy,
        example_input: "\"()[]{}\"",
        example_output: "true",
        starter_code: r#"class Solution {
public:
    bool isValid(string s) {
        // Write your code here
    }
};"#,
        test_cases: &[
            ("\"()[]{}\"", "true"),
            ("\"(]\"", "false"),
            ("\"([{}])\"", "true"),
            ("\"((\"", "false"),
            ("\"()\"", "true"),
            ("\"{[()]}\",", "true"),
            ("\"([)]\"", "false"),
            ("\"\"", "true"),
            ("\"[\"", "false"),
            ("\"]\"", "false"),
        ],
    },
    SeedProblem {
        title: "Palindrome Number",
        description: "Determine whether an integer is a palindrome. An integer is a palindrome when it reads the same backward as forward.",
        difficulty: Difficulty::Easy,
        example_input: "121",
        example_output: "true",
        starter_code: r#"class Solution {
public:
    bool isPalindrome(int x) {
        // Write your code here
    }
};"#,
        test_cases: &[
            ("121", "true"),
            ("-121", "false"),
            ("10", "false"),
            ("0", "true"),
            ("1221", "true"),
            ("12321", "true"),
            ("1001", "true"),
            ("100", "false"),
            ("99", "true"),
            ("123456", "false"),
        ],
    },
    SeedProblem {
        title: "Fibonacci Number",
        description: "Return the nth Fibonacci number. F(0)=0, F(1)=1, and F(n)=F(n−1)+F(n−2) for n>1.",
        difficulty: Difficulty::Easy,
        example_input: "5",
        example_output: "5",
        starter_code: r#"class Solution {
public:
    int fib(int n) {
        // Write your code here
    }
};"#,
        test_cases: &[
            ("0", "0"),
            ("1", "1"),
            ("2", "1"),
            ("3", "2"),
            ("5", "5"),
            ("7", "13"),
            ("10", "55"),
            ("12", "144"),
            ("15", "610"),
            ("20", "6765"),
        ],
    },
    SeedProblem {
        title: "Factorial of N",
        description: "Find the factorial of a given number n. Factorial of n (n!) = n × (n−1) × ... × 1.",
        difficulty: Difficulty::Easy,
        example_input: "5",
        example_output: "120",
        starter_code: r#"class Solution {
public:
    long long factorial(int n) {
        // Write your code here
    }
};"#,
        test_cases: &[
            ("0", "1"),
            ("1", "1"),
            ("2", "2"),
            ("3", "6"),
            ("4", "24"),
            ("5", "120"),
            ("6", "720"),
            ("7", "5040"),
            ("8", "40320"),
            ("10", "3628800"),
        ],
    },
    SeedProblem {
        title: "Check Prime",
        description: "Determine whether a number n is a prime number. Return true if it is prime, false otherwise.",
        difficulty: Difficulty::Easy,
        example_input: "7",
        example_output: "true",
        starter_code: r#"class Solution {
public:
    bool isPrime(int n) {
        // Write your code here
    }
};"#,
        test_cases: &[
            ("2", "true"),
            ("3", "true"),
            ("4", "false"),
            ("5", "true"),
            ("10", "false"),
            ("11", "true"),
            ("13", "true"),
            ("15", "false"),
            ("19", "true"),
            ("21", "false"),
        ],
    },
    SeedProblem {
        title: "Power of Two",
        description: "Determine whether a given number n is a power of two. Return true if it is, false otherwise.",
        difficulty: Difficulty::Easy,
        example_input: "8",
        example_output: "true",
        starter_code: r#"class Solution {
public:
    bool isPowerOfTwo(int n) {
        // Write your code here
    }
};"#,
        test_cases: &[
            ("1", "true"),
            ("2", "true"),
            ("3", "false"),
            ("4", "true"),
            ("5", "false"),
            ("8", "true"),
            ("16", "true"),
            ("18", "false"),
            ("32", "true"),
            ("64", "true"),
        ],
    },
    SeedProblem {
        title: "Sum of Digits",
        description: "Find the sum of digits of a given integer n.",
        difficulty: Difficulty::Easy,
        example_input: "1234",
        example_output: "10",
        starter_code: r#"class Solution {
public:
    int sumOfDigits(int n) {
        // Write your code here
    }
};"#,
        test_cases: &[
            ("0", "0"),
            ("5", "5"),
            ("10", "1"),
            ("99", "18"),
            ("1234", "10"),
            ("5678", "26"),
            ("1001", "2"),
            ("9999", "36"),
            ("12345", "15"),
            ("808", "16"),
        ],
    },
    SeedProblem {
        title: "Count Vowels",
        description: "Count the number of vowels (a, e, i, o, u) in a given string.",
        difficulty: Difficulty::Easy,
        example_input: "\"hello world\"",
        example_output: "3",
        starter_code: r#"class Solution {
public:
    int countVowels(string s) {
        // Write your code here
    }
};"#,
        test_cases: &[
            ("\"hello\"", "2"),
            ("\"world\"", "1"),
            ("\"aeiou\"", "5"),
            ("\"bcdfg\"", "0"),
            ("\"Apples\"", "2"),
            ("\"Programming\"", "3"),
            ("\"Queue\"", "4"),
            ("\"xyz\"", "0"),
            ("\"Education\"", "5"),
            ("\"AI and Data Science\"", "7"),
        ],
    },
    SeedProblem {
        title: "Maximum Element in Array",
        description: "Find the maximum element in a given array of integers.",
        difficulty: Difficulty::Easy,
        example_input: "[1, 3, 7, 0, 5]",
        example_output: "7",
        starter_code: r#"class Solution {
public:
    int maxElement(vector<int>& nums) {
        // Write your code here
    }
};"#,
        test_cases: &[
            ("[1,2,3,4,5]", "5"),
            ("[5,4,3,2,1]", "5"),
            ("[-1,-2,-3,-4]", "-1"),
            ("[100,200,300]", "300"),
            ("[0]", "0"),
            ("[10,10,10]", "10"),
            ("[1,3,7,0,5]", "7"),
            ("[999,888,777]", "999"),
            ("[4,5,6,7,8,9]", "9"),
            ("[1000,-100,50]", "1000"),
        ],
    },
    SeedProblem {
        title: "GCD of Two Numbers",
        description: "Find the greatest common divisor (GCD) of two numbers.",
        difficulty: Difficulty::Easy,
        example_input: "54,24",
        example_output: "6",
        starter_code: r#"class Solution {
public:
    int gcd(int a, int b) {
        // Write your code here
    }
};"#,
        test_cases: &[
            ("54,24", "6"),
            ("12,8", "4"),
            ("100,80", "20"),
            ("81,27", "27"),
            ("17,13", "1"),
            ("25,5", "5"),
            ("0,10", "10"),
            ("48,18", "6"),
            ("56,98", "14"),
            ("270,192", "6"),
        ],
    },
    SeedProblem {
        title: "Armstrong Number",
        description: "Check whether a number n is an Armstrong number.",
        difficulty: Difficulty::Medium,
        example_input: "153",
        example_output: "true",
        starter_code: r#"class Solution {
public:
    bool isArmstrong(int n) {
        // Write your code here
    }
};"#,
        test_cases: &[
            ("0", "true"),
            ("1", "true"),
            ("153", "true"),
            ("370", "true"),
            ("371", "true"),
            ("407", "true"),
            ("123", "false"),
            ("9474", "true"),
            ("9475", "false"),
            ("1634", "true"),
        ],
    },
    SeedProblem {
        title: "Count Digits in a Number",
        description: "Count the total number of digits in a given integer n.",
        difficulty: Difficulty::Easy,
        example_input: "12345",
        example_output: "5",
        starter_code: r#"class Solution {
public:
    int countDigits(int n) {
        // Write your code here
    }
};"#,
        test_cases: &[
            ("0", "1"),
            ("5", "1"),
            ("10", "2"),
            ("99", "2"),
            ("1000", "4"),
            ("12345", "5"),
            ("-1234", "4"),
            ("100000", "6"),
            ("999999", "6"),
            ("1000000", "7"),
        ],
    },
    SeedProblem {
        title: "Leap Year Checker",
        description: "Determine whether a given year is a leap year.",
        difficulty: Difficulty::Easy,
        example_input: "2000",
        example_output: "true",
        starter_code: r#"class Solution {
public:
    bool isLeapYear(int year) {
        // Write your code here
    }
};"#,
        test_cases: &[
            ("2000", "true"),
            ("1900", "false"),
            ("2020", "true"),
            ("2021", "false"),
            ("2016", "true"),
            ("2018", "false"),
            ("2400", "true"),
            ("2100", "false"),
            ("1600", "true"),
            ("1800", "false"),
        ],
    },
    SeedProblem {
        title: "Even or Odd",
        description: "Determine whether a number is even or odd.",
        difficulty: Difficulty::Easy,
        example_input: "7",
        example_output: "odd",
        starter_code: r#"class Solution {
public:
    string evenOrOdd(int n) {
        // Write your code here
    }
};"#,
        test_cases: &[
            ("0", "even"),
            ("1", "odd"),
            ("2", "even"),
            ("3", "odd"),
            ("10", "even"),
            ("99", "odd"),
            ("100", "even"),
            ("-3", "odd"),
            ("-8", "even"),
            ("15", "odd"),
        ],
    },
    SeedProblem {
        title: "Sum of Array Elements",
        description: "Find the sum of all elements in an integer array.",
        difficulty: Difficulty::Easy,
        example_input: "[1,2,3,4,5]",
        example_output: "15",
        starter_code: r#"class Solution {
public:
    long long sumArray(vector<int>& nums) {
        // Write your code here
    }
};"#,
        test_cases: &[
            ("[1,2,3,4,5]", "15"),
            ("[10,20,30]", "60"),
            ("[0,0,0]", "0"),
            ("[1]", "1"),
            ("[-1,1]", "0"),
            ("[5,5,5,5]", "20"),
            ("[-5,-10,-15]", "-30"),
            ("[100,200,300]", "600"),
            ("[7,14,21]", "42"),
            ("[2,4,6,8,10]", "30"),
        ],
    },
    SeedProblem {
        title: "Count Words in String",
        description: "Count the total number of words in a given string.",
        difficulty: Difficulty::Easy,
        example_input: "\"Hello world\"",
        example_output: "2",
        starter_code: r#"class Solution {
public:
    int countWords(string s) {
        // Write your code here
    }
};"#,
        test_cases: &[
            ("\"Hello world\"", "2"),
            ("\"One two three\"", "3"),
            ("\"AI\"", "1"),
            ("\"AI and Data Science\"", "4"),
            ("\"\"", "0"),
            ("\"   space test   \"", "2"),
            ("\"multiple   spaces  test\"", "3"),
            ("\"Count me in\"", "3"),
            ("\"word\"", "1"),
            ("\"This is a test case\"", "5"),
        ],
    },
    SeedProblem {
        title: "Reverse String",
        description: "Reverse a given string input.",
        difficulty: Difficulty::Easy,
        example_input: "\"hello\"",
        example_output: "\"olleh\"",
        starter_code: r#"class Solution {
public:
    string reverseString(string s) {
        // Write your code here
    }
};"#,
        test_cases: &[
            ("\"hello\"", "\"olleh\""),
            ("\"abc\"", "\"cba\""),
            ("\"a\"", "\"a\""),
            ("\"racecar\"", "\"racecar\""),
            ("\"AI\"", "\"IA\""),
            ("\"world\"", "\"dlrow\""),
            ("\"openai\"", "\"ianepo\""),
            ("\"data\"", "\"atad\""),
            ("\"science\"", "\"ecneics\""),
            ("\"12345\"", "\"54321\""),
        ],
    },
    SeedProblem {
        title: "Palindrome String",
        description: "Check whether a string is a palindrome.",
        difficulty: Difficulty::Easy,
        example_input: "\"madam\"",
        example_output: "true",
        starter_code: r#"class Solution {
public:
    bool isPalindrome(string s) {
        // Write your code here
    }
};"#,
        test_cases: &[
            ("\"madam\"", "true"),
            ("\"racecar\"", "true"),
            ("\"hello\"", "false"),
            ("\"a\"", "true"),
            ("\"abba\"", "true"),
            ("\"abca\"", "false"),
            ("\"Madam\"", "false"),
            ("\"noon\"", "true"),
            ("\"palindrome\"", "false"),
            ("\"level\"", "true"),
        ],
    },
];
