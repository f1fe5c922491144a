use actix_web::HttpResponse;

/// Minimal server-rendered pages for the form-driven flows. The data
/// endpoints are JSON; these exist so login/signup/key management work
/// from a browser without a separate frontend.
fn page(title: &str, body: &str) -> HttpResponse {
    let html = format!(
        "<!doctype html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>\n<h1>{}</h1>\n{}\n</body>\n</html>",
        title, title, body
    );
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}

pub async fn home() -> HttpResponse {
    page(
        "Crypto Insight",
        "<p>Track prices, news and naive buy/sell signals.</p>\n\
         <p><a href=\"/login\">Login</a> | <a href=\"/signup\">Sign up</a></p>",
    )
}

pub async fn login_page() -> HttpResponse {
    page(
        "Login",
        "<form method=\"post\" action=\"/login\">\n\
         <label>Username <input name=\"username\" required></label>\n\
         <label>Password <input name=\"password\" type=\"password\" required></label>\n\
         <button type=\"submit\">Login</button>\n\
         </form>\n\
         <p>No account? <a href=\"/signup\">Sign up</a></p>",
    )
}

pub async fn signup_page() -> HttpResponse {
    page(
        "Sign up",
        "<form method=\"post\" action=\"/signup\">\n\
         <label>Username <input name=\"username\" required></label>\n\
         <label>Password <input name=\"password\" type=\"password\" required></label>\n\
         <button type=\"submit\">Create account</button>\n\
         </form>",
    )
}

pub async fn dashboard() -> HttpResponse {
    page(
        "Dashboard",
        "<ul>\n\
         <li><a href=\"/api_keys\">Provider API keys</a></li>\n\
         <li><a href=\"/charts?crypto_symbol=BTC\">BTC candlestick data</a></li>\n\
         <li><a href=\"/news?crypto_symbol=BTC\">BTC news + signal</a></li>\n\
         <li><a href=\"/logout\">Logout</a></li>\n\
         </ul>",
    )
}

pub fn api_keys_form(news_api_key: &str, market_data_api_key: &str) -> HttpResponse {
    let body = format!(
        "<form method=\"post\" action=\"/api_keys\">\n\
         <label>News API key <input name=\"newsapi_key\" value=\"{}\"></label>\n\
         <label>Market data API key <input name=\"coinmarketcap_key\" value=\"{}\"></label>\n\
         <button type=\"submit\">Save</button>\n\
         </form>\n\
         <p><a href=\"/dashboard\">Back to dashboard</a></p>",
        escape_attr(news_api_key),
        escape_attr(market_data_api_key)
    );
    page("Provider API keys", &body)
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_escaping_neutralizes_quotes_and_tags() {
        assert_eq!(
            escape_attr("\"><script>"),
            "&quot;&gt;&lt;script&gt;"
        );
    }
}
