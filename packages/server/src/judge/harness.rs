//! Builds runnable single-file programs out of bare solution snippets.
//!
//! Problems store starter code without a `main` function. For C++ the harness
//! appends one keyed off the problem title, parsing the arguments out of the
//! test case's free-form input text. Other languages run the snippet as-is
//! and are expected to read stdin or print directly.

use common::Language;
use regex::Regex;

/// Wraps `code` into a complete program for `problem_title`, with the
/// arguments from `input` baked in as literals.
///
/// Unrecognized titles still produce a compilable program that prints a
/// fixed banner, so ad-hoc snippets can be run against an empty input.
pub fn wrap_source(language: Language, code: &str, input: &str, problem_title: &str) -> String {
    if language != Language::Cpp {
        return code.to_string();
    }

    let title = problem_title.to_lowercase();

    if title.contains("two sum") {
        let nums = extract_int_list(input, "{2,7,11,15}");
        let target = find_labelled_int(input, "target").unwrap_or(9);
        // The solution defines a free function here, not a Solution class.
        return with_main(
            code,
            &format!(
                "    vector<int> nums = {nums};\n    \
                 int target = {target};\n    \
                 vector<int> result = twoSum(nums, target);\n    \
                 if (!result.empty())\n        \
                 cout << \"[\" << result[0] << \",\" << result[1] << \"]\";\n    \
                 else\n        \
                 cout << \"[]\";"
            ),
        );
    }
    if title.contains("reverse number") {
        return with_main(code, &int_method_body("reverseNumber", find_int(input)));
    }
    if title.contains("valid parentheses") {
        let s = extract_quoted(input).unwrap_or_else(|| "()".to_string());
        return with_main(code, &string_predicate_body("isValid", &s));
    }
    if title.contains("palindrome number") {
        return with_main(
            code,
            &int_predicate_body("isPalindrome", parse_leading_int(input)),
        );
    }
    if title.contains("fibonacci number") {
        return with_main(code, &int_method_body("fib", parse_leading_int(input)));
    }
    if title.contains("factorial") {
        return with_main(
            code,
            &int_method_body("factorial", parse_leading_int(input)),
        );
    }
    if title.contains("check prime") {
        return with_main(
            code,
            &int_predicate_body("isPrime", parse_leading_int(input)),
        );
    }
    if title.contains("power of two") {
        return with_main(
            code,
            &int_predicate_body("isPowerOfTwo", parse_leading_int(input)),
        );
    }
    if title.contains("sum of digits") {
        return with_main(
            code,
            &int_method_body("sumOfDigits", parse_leading_int(input)),
        );
    }
    if title.contains("count vowels") {
        // Whole input is the string; unwrap symmetric quotes if present.
        let s = strip_outer_quotes(input.trim());
        return with_main(
            code,
            &format!(
                "    Solution obj;\n    \
                 string s = \"{}\";\n    \
                 cout << obj.countVowels(s) << flush;",
                escape_cpp(s)
            ),
        );
    }
    if title.contains("maximum element in array") {
        let nums = extract_int_list(input, "{1,2,3}");
        return with_main(code, &vector_method_body("maxElement", &nums));
    }
    if title.contains("gcd of two numbers") {
        let mut parts = input.split(',');
        let a = parse_leading_int(parts.next().unwrap_or(""));
        let b = parse_leading_int(parts.next().unwrap_or(""));
        return with_main(
            code,
            &format!(
                "    Solution obj;\n    \
                 int a = {a}, b = {b};\n    \
                 cout << obj.gcd(a, b);"
            ),
        );
    }
    if title.contains("armstrong number") {
        return with_main(
            code,
            &int_predicate_body("isArmstrong", parse_leading_int(input)),
        );
    }
    if title.contains("count digits in a number") {
        return with_main(
            code,
            &int_inline_body("countDigits", parse_leading_int(input)),
        );
    }
    if title.contains("leap year checker") {
        return with_main(
            code,
            &int_predicate_body("isLeapYear", parse_leading_int(input)),
        );
    }
    if title.contains("even or odd") {
        return with_main(
            code,
            &int_inline_body("evenOrOdd", parse_leading_int(input)),
        );
    }
    if title.contains("sum of array elements") {
        let nums = extract_int_list(input, "{1,2,3}");
        return with_main(code, &vector_method_body("sumArray", &nums));
    }
    if title.contains("count words in string") {
        let s = extract_quoted(input).unwrap_or_default();
        return with_main(code, &string_method_body("countWords", &s));
    }
    if title.contains("reverse string") {
        let s = extract_quoted(input).unwrap_or_default();
        // Expected outputs keep the quotes, so print them around the result.
        return with_main(
            code,
            &format!(
                "    Solution obj;\n    \
                 string s = \"{}\";\n    \
                 cout << \"\\\"\" << obj.reverseString(s) << \"\\\"\";",
                escape_cpp(&s)
            ),
        );
    }
    if title.contains("palindrome string") {
        let s = extract_quoted(input).unwrap_or_default();
        return with_main(code, &string_predicate_body("isPalindrome", &s));
    }
    if title.contains("prime numbers in range") {
        let n = parse_leading_int(input);
        return with_main(
            code,
            &format!(
                "    Solution obj;\n    \
                 int n = {n};\n    \
                 vector<int> primes = obj.primeRange(n);\n    \
                 cout << \"[\";\n    \
                 for (int i = 0; i < primes.size(); i++) {{\n        \
                 cout << primes[i];\n        \
                 if (i + 1 < primes.size()) cout << \",\";\n    \
                 }}\n    \
                 cout << \"]\";"
            ),
        );
    }
    if title.contains("sum of first n natural numbers") {
        return with_main(
            code,
            &int_inline_body("sumNatural", parse_leading_int(input)),
        );
    }
    if title.contains("factor count") {
        return with_main(
            code,
            &int_inline_body("countFactors", parse_leading_int(input)),
        );
    }

    with_main(code, "    cout << \"Code executed successfully!\";")
}

fn with_main(code: &str, body: &str) -> String {
    format!(
        "#include <bits/stdc++.h>\n\
         using namespace std;\n\
         {code}\n\
         int main() {{\n\
         {body}\n    \
         return 0;\n\
         }}\n"
    )
}

fn int_method_body(method: &str, n: i64) -> String {
    format!(
        "    Solution obj;\n    \
         int n = {n};\n    \
         cout << obj.{method}(n);"
    )
}

fn int_predicate_body(method: &str, n: i64) -> String {
    format!(
        "    Solution obj;\n    \
         int n = {n};\n    \
         cout << (obj.{method}(n) ? \"true\" : \"false\");"
    )
}

fn int_inline_body(method: &str, n: i64) -> String {
    format!("    Solution obj;\n    cout << obj.{method}({n});")
}

fn vector_method_body(method: &str, nums: &str) -> String {
    format!(
        "    Solution obj;\n    \
         vector<int> nums = {nums};\n    \
         cout << obj.{method}(nums);"
    )
}

fn string_method_body(method: &str, s: &str) -> String {
    format!(
        "    Solution obj;\n    \
         string s = \"{}\";\n    \
         cout << obj.{method}(s);",
        escape_cpp(s)
    )
}

fn string_predicate_body(method: &str, s: &str) -> String {
    format!(
        "    Solution obj;\n    \
         string s = \"{}\";\n    \
         cout << (obj.{method}(s) ? \"true\" : \"false\");",
        escape_cpp(s)
    )
}

/// First `[...]` group in the input, reformatted as a C++ brace initializer.
fn extract_int_list(input: &str, default: &str) -> String {
    Regex::new(r"\[(.*?)\]")
        .unwrap()
        .captures(input)
        .map(|c| format!("{{{}}}", &c[1]))
        .unwrap_or_else(|| default.to_string())
}

/// First single- or double-quoted string in the input.
fn extract_quoted(input: &str) -> Option<String> {
    Regex::new(r#""([^"]+)"|'([^']+)'"#)
        .unwrap()
        .captures(input)
        .and_then(|c| c.get(1).or_else(|| c.get(2)))
        .map(|m| m.as_str().to_string())
}

/// Integer labelled `label = <n>` anywhere in the input.
fn find_labelled_int(input: &str, label: &str) -> Option<i64> {
    Regex::new(&format!(r"{label}\s*=\s*(-?\d+)"))
        .unwrap()
        .captures(input)
        .and_then(|c| c[1].parse().ok())
}

/// First integer anywhere in the input, else 0.
fn find_int(input: &str) -> i64 {
    Regex::new(r"-?\d+")
        .unwrap()
        .find(input)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Leading integer of the trimmed input, else 0. Trailing garbage is
/// ignored, so "42abc" parses as 42.
fn parse_leading_int(input: &str) -> i64 {
    Regex::new(r"^\s*([+-]?\d+)")
        .unwrap()
        .captures(input)
        .and_then(|c| c[1].parse().ok())
        .unwrap_or(0)
}

fn escape_cpp(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Removes one symmetric pair of wrapping quotes, if present.
fn strip_outer_quotes(s: &str) -> &str {
    if s.len() >= 2
        && ((s.starts_with('"') && s.ends_with('"'))
            || (s.starts_with('\'') && s.ends_with('\'')))
    {
        &s[1..s.len() - 1]
    } else {
        s
    }
}
