use crate::cli;

/// Helps check if a command returns the expected [`anyhow::Result<cli::Output>`].
pub enum ResultMatcher<'a> {
    /// Asserts result is `Ok` and its payload equals the given value.
    OkExact(cli::Output),

    /// Asserts result is `Ok` and its rendering equals the given text.
    OkText(&'a str),

    /// Asserts result is an `Ok(Output::Str(_))` matching the given glob
    /// pattern. Matching is case-insensitive.
    OkStrGlob(&'a str),

    /// Asserts result is `Err` and that the error's full cause chain, joined
    /// with `": "`, matches the given glob pattern. Matching is
    /// case-insensitive.
    ErrGlob(&'a str),
}

fn diff_and_panic(want: &str, got: &str) -> ! {
    text_diff::print_diff(want, got, " ");
    panic!("diff between want (red) and got (green), see above");
}

impl ResultMatcher<'_> {
    pub fn assert_matches(&self, result: anyhow::Result<cli::Output>) {
        match self {
            ResultMatcher::OkExact(want_output) => {
                if let Ok(got_output) = &result {
                    if got_output == want_output {
                        return;
                    }
                    diff_and_panic(
                        format!("{:?}", want_output).as_str(),
                        format!("{:?}", got_output).as_str(),
                    );
                }
                panic!("\n\twant: {:?}\n\tgot: {:?}\n", want_output, result);
            }
            ResultMatcher::OkText(want_text) => {
                if let Ok(got_output) = &result {
                    let got_text = got_output.to_string();
                    if got_text == *want_text {
                        return;
                    }
                    diff_and_panic(want_text, &got_text);
                }
                panic!("\n\twant: Ok({:?})\n\tgot: {:?}\n", want_text, result);
            }
            ResultMatcher::OkStrGlob(pattern) => {
                let pattern_obj = wildmatch::WildMatch::new(pattern.to_lowercase().as_str());
                let matches = matches!(
                    result,
                    Ok(cli::Output::Str(ref got_string)) if pattern_obj.matches(got_string.to_lowercase().as_str()),
                );
                assert!(
                    matches,
                    "\n\twant matches: Ok({:?})\n\tgot: {:?}\n",
                    pattern, result
                );
            }
            ResultMatcher::ErrGlob(pattern) => {
                let pattern_obj = wildmatch::WildMatch::new(pattern.to_lowercase().as_str());
                let chain = |e: &anyhow::Error| {
                    e.chain()
                        .map(|cause| cause.to_string())
                        .collect::<Vec<_>>()
                        .join(": ")
                };
                let matches = matches!(
                    result,
                    Err(ref got_err) if pattern_obj.matches(chain(got_err).to_lowercase().as_str()),
                );
                assert!(
                    matches,
                    "\n\twant matches: Err({:?})\n\tgot: {:?}\n",
                    pattern, result
                );
            }
        }
    }
}
