use ammonia;

/// Clean HTML content using the ammonia library.
///
/// Question prompts may carry light formatting (<b>, <em>, <br>) and are
/// rendered unescaped, so anything outside ammonia's whitelist is stripped
/// here. `<script>` and `<style>` are removed together with their content.
pub fn clean_html(input: &str) -> String {
    ammonia::clean(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_basic_formatting() {
        assert_eq!(clean_html("<b>bold</b> and <em>em</em>"), "<b>bold</b> and <em>em</em>");
    }

    #[test]
    fn strips_scripts_and_handlers() {
        assert_eq!(clean_html("a<script>alert(1)</script>b"), "ab");
        assert_eq!(clean_html(r#"<b onclick="x()">y</b>"#), "<b>y</b>");
    }
}
