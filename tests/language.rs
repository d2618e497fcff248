use std::fs;

use aurora::{
    config::{Config, DEFAULT_MAX_CALL_DEPTH, ScopeMode},
    execute, get_output,
    interpreter::value::core::Value,
};
use walkdir::WalkDir;

#[test]
fn example_scripts_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "aur"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                             panic!("Failed to read {expected_path:?}: {e}")
                                                         });

        count += 1;
        match get_output(&source) {
            Ok(lines) => assert_eq!(lines.join("\n"),
                                    expected.trim_end(),
                                    "Output of {path:?} differs"),
            Err(e) => panic!("Script {path:?} failed:\n{source}\nError: {e}"),
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn output_with(src: &str, config: Config) -> Vec<String> {
    let mut lines = Vec::new();
    if let Err(e) = execute(src, config, &mut |line: &str| lines.push(line.to_string())) {
        panic!("Script failed: {e}\n{src}");
    }
    lines
}

fn assert_output(src: &str, expected: &[&str]) {
    match get_output(src) {
        Ok(lines) => assert_eq!(lines, expected, "Script:\n{src}"),
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

fn assert_failure(src: &str) {
    if get_output(src).is_ok() {
        panic!("Script succeeded but was expected to fail:\n{src}")
    }
}

fn error_message(src: &str) -> String {
    match get_output(src) {
        Ok(_) => panic!("Script succeeded but was expected to fail:\n{src}"),
        Err(e) => e.to_string(),
    }
}

#[test]
fn variable_and_arithmetic() {
    assert_output("let x = 5\nsay x + 2", &["7"]);
}

#[test]
fn single_line_if_else() {
    assert_output("if 0: say \"yes\" else say \"no\" end", &["no"]);
}

#[test]
fn class_with_init() {
    assert_output("class C: define init(self, v): let self.val = v end end\nlet c = C(5)\nsay c.val",
                  &["5"]);
}

#[test]
fn push_is_visible_through_the_list() {
    assert_output("let l = [1,2,3]\npush(l, 4)\nsay l", &["[1, 2, 3, 4]"]);
}

#[test]
fn return_from_inside_repeat() {
    assert_output("define f(): repeat 3 times: return 1 end end\nsay f()", &["1"]);
}

#[test]
fn unknown_variable_is_null() {
    assert_output("say unknownVar", &["null"]);
}

#[test]
fn say_literals_in_order() {
    assert_output("say 1\nsay \"two\"\nsay 3.5\nsay [1, \"a\", [2]]",
                  &["1", "two", "3.5", "[1, a, [2]]"]);
}

#[test]
fn assignment_mutates_outer_binding() {
    let src = "let x = 1
define f():
  x = 2
  let y = 3
end
f()
say x
say y";
    assert_output(src, &["2", "null"]);
}

#[test]
fn blocks_share_the_enclosing_scope() {
    assert_output("if 1: let z = 4 end\nsay z", &["4"]);
    assert_output("let i = 0\nwhile i < 3: i = i + 1 end\nsay i", &["3"]);
    assert_output("repeat 2 times: let w = 7 end\nsay w", &["7"]);
}

#[test]
fn parameters_do_not_leak_into_outer_scope() {
    let src = "let a = 1
define f(a):
  a = a + 10
  return a
end
say f(5)
say a";
    assert_output(src, &["15", "1"]);
}

#[test]
fn return_stops_loop_and_function() {
    let src = "define find(limit):
  let i = 0
  while i < limit:
    if i == 3:
      return i
    end
    i = i + 1
  end
  return 0 - 1
end
say find(10)
say find(2)";
    assert_output(src, &["3", "-1"]);
}

#[test]
fn top_level_return_ends_the_program() {
    let mut lines = Vec::new();
    let result = execute("say 1\nreturn 2\nsay 3",
                         Config::default(),
                         &mut |line: &str| lines.push(line.to_string()));

    assert_eq!(result.unwrap(), Value::Number(2.0));
    assert_eq!(lines, ["1"]);
}

#[test]
fn builtin_list_operations() {
    let src = "let l = []
push(l, \"a\")
push(l, \"b\")
let alias = l
push(alias, \"c\")
say len(l)
say pop(l)
say l
say len(\"hello\")";
    assert_output(src, &["3", "c", "[a, b]", "5"]);
}

#[test]
fn malformed_builtin_calls_are_null() {
    assert_output("say pop([])", &["null"]);
    assert_output("say push(5, 1)", &["null"]);
    assert_output("say len()", &["null"]);
    assert_output("say shout(1)", &["null"]);
    assert_output("let n = 5\nsay n.foo\nsay n(1)", &["null", "null"]);
}

#[test]
fn user_functions_shadow_builtins() {
    assert_output("define len(x): return 42 end\nsay len([1])", &["42"]);
}

#[test]
fn truthiness() {
    let src = "if 0: say \"a\" end
if \"\": say \"b\" end
if missing: say \"c\" end
if []: say \"d\" end
if \"x\": say \"e\" end
if 1 == 1: say \"f\" end
if 1 == 2: say \"g\" end";
    assert_output(src, &["d", "e", "f"]);
}

#[test]
fn methods_fields_and_chaining() {
    let src = "class Counter:
  define init(self):
    let self.count = 0
  end
  define inc(self, by):
    self.count = self.count + by
    return self
  end
end
let c = Counter()
c.inc(2)
c.inc(3).inc(4)
say c.count
say c
say Counter";
    assert_output(src, &["9", "<Counter Instance>", "<class Counter>"]);
}

#[test]
fn fields_take_priority_over_methods() {
    let src = "class A:
  define name(self): return \"method\" end
end
let a = A()
let b = A()
say a.name()
a.name = \"field\"
say a.name
say b.name";
    assert_output(src, &["method", "field", "<bound method A.name>"]);
}

#[test]
fn classes_without_init_ignore_arguments() {
    assert_output("class P: end\nlet p = P(1, 2)\nsay p", &["<P Instance>"]);
}

#[test]
fn attribute_write_on_non_instance_is_null() {
    assert_output("let n = 1\nsay n.x = 2\nsay n", &["null", "1"]);
}

#[test]
fn missing_and_extra_arguments() {
    assert_output("define f(a, b): return b end\nsay f(1)\nsay f(1, 2, 3)",
                  &["null", "2"]);
}

#[test]
fn functions_without_return_yield_null() {
    assert_output("define f(): let x = 1 end\nsay f()", &["null"]);
}

#[test]
fn operators_and_precedence() {
    assert_output("a = b = 3\nsay a + b", &["6"]);
    assert_output("say 2 + 3 * 4", &["14"]);
    assert_output("say (2 + 3) * 4", &["20"]);
    assert_output("say 10 / 4", &["2.5"]);
    assert_output("say 1 / 0", &["Infinity"]);
    assert_output("say 1 + 2 > 2", &["true"]);
    assert_output("say 10 - 2 - 3", &["5"]);
}

#[test]
fn very_large_and_small_numbers_use_exponent_form() {
    assert_output("say 1000000000000000000000 * 10", &["1e+22"]);
    assert_output("say 1 / 10000000", &["1e-7"]);
    assert_output("say 1 / 1000000", &["0.000001"]);
}

#[test]
fn strings() {
    assert_output("say \"a\" + \"b\"", &["ab"]);
    assert_output("say \"apple\" < \"banana\"", &["true"]);
    assert_output("say \"# not a comment\"", &["# not a comment"]);
    assert_output("say \"unterminated", &["unterminated"]);
}

#[test]
fn equality() {
    let src = "say 1 == 1
say \"a\" == \"a\"
say missing == other
say 1 == \"1\"
let l = [1]
let m = l
say l == m
say l == [1]";
    assert_output(src, &["true", "true", "true", "false", "true", "false"]);
}

#[test]
fn mismatched_operands_are_type_errors() {
    assert_failure("say 1 + \"a\"");
    assert_failure("say [1] * 2");
    assert_failure("say 1 < \"b\"");
    assert_failure("say 1 - missing");

    let message = error_message("say 1\nsay \"n\" - 1");
    assert!(message.contains("line 2"), "{message}");
    assert!(message.contains("Type error"), "{message}");
}

#[test]
fn output_before_a_runtime_error_is_kept() {
    let mut lines = Vec::new();
    let result = execute("say 1\nsay 1 + \"a\"\nsay 2",
                         Config::default(),
                         &mut |line: &str| lines.push(line.to_string()));

    assert!(result.is_err());
    assert_eq!(lines, ["1"]);
}

#[test]
fn repeat_counts() {
    assert_output("repeat 2.5 times: say \"x\" end", &["x", "x", "x"]);
    assert_output("repeat 0 times: say \"x\" end\nsay \"done\"", &["done"]);
    assert_failure("repeat \"3\" times: say 1 end");
}

#[test]
fn syntax_errors() {
    assert_failure("say (1 + 2");
    assert_failure("1 = 2");
    assert_failure("if 1: say 2");
    assert_failure("repeat 3: say 1 end");
    assert_failure("import tools");
    assert_failure("say");
    assert_failure("define (x) end");
    assert_failure("say -1");

    assert_eq!(error_message("say 1\nsay )"),
               "Syntax Error: Unexpected token ')' at line 2");
    assert_eq!(error_message("let x = 1\nx + 1 = 2"),
               "Syntax Error: Invalid assignment target at line 2");
}

#[test]
fn syntax_errors_prevent_any_output() {
    let mut lines = Vec::new();
    let result = execute("say 1\nsay (",
                         Config::default(),
                         &mut |line: &str| lines.push(line.to_string()));

    assert!(result.is_err());
    assert!(lines.is_empty());
}

#[test]
fn stray_end_stops_the_program() {
    assert_output("say 1\nend\nsay 2", &["1"]);
}

#[test]
fn class_bodies_skip_everything_but_methods() {
    assert_output("class K:\n  42\n  define get(self): return 7 end\nend\nsay K().get()",
                  &["7"]);
}

#[test]
fn comments_and_unknown_characters_are_ignored() {
    assert_output("say 1 # comment\n# whole line\nsay 2", &["1", "2"]);
    assert_output("say 1 @ + $ 2", &["3"]);
}

#[test]
fn functions_are_values() {
    let src = "define twice(f, x): return f(f(x)) end
define inc(x): return x + 1 end
say twice(inc, 3)
say inc";
    assert_output(src, &["5", "<function inc>"]);
}

#[test]
fn recursion() {
    let src = "define fib(n):
  if n < 2: return n end
  return fib(n - 1) + fib(n - 2)
end
say fib(15)";
    assert_output(src, &["610"]);
}

#[test]
fn lexical_scope_is_the_default() {
    let src = "define make_adder(n):
  define add(x):
    return x + n
  end
  return add
end
let add5 = make_adder(5)
say add5(1)";
    assert_output(src, &["6"]);
}

#[test]
fn dynamic_scope_resolves_at_the_call_site() {
    let src = "let n = 1
define show(): say n end
define wrapper(n): show() end
wrapper(2)";

    assert_eq!(output_with(src, Config::default()), ["1"]);
    assert_eq!(output_with(src, Config::default().with_scope_mode(ScopeMode::Dynamic)),
               ["2"]);
}

#[test]
fn call_depth_is_limited() {
    let config = Config::default().with_max_call_depth(50);
    let result = execute("define spin(): return spin() end\nspin()", config, &mut |_: &str| {});

    let message = result.unwrap_err().to_string();
    assert!(message.contains("Maximum call depth of 50"), "{message}");
}

const DEEP_METHOD: &str = "class R:
  define down(self, n):
    while 1:
      if n < 1: return 0 end
      repeat 1 times:
        if 1:
          return 1 + (1 + (1 + self.down(n - 1)))
        end
      end
    end
  end
end
";

#[test]
fn recursion_close_to_the_default_limit_completes() {
    assert_output("define down(n):\n  if n < 1: return 0 end\n  return down(n - 1) + 1\nend\nsay down(500)",
                  &["500"]);

    let src = format!("{DEEP_METHOD}say R().down(505)");
    assert_output(&src, &["1515"]);
}

#[test]
fn recursion_past_the_default_limit_is_an_error() {
    let src = format!("{DEEP_METHOD}say R().down({})", DEFAULT_MAX_CALL_DEPTH + 10);
    let message = error_message(&src);

    assert!(message.contains(&format!("Maximum call depth of {DEFAULT_MAX_CALL_DEPTH}")),
            "{message}");
}
