use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};

/// post a serialized event to the tracking endpoint.
pub async fn post_event(
	client: &Client,
	endpoint: &str,
	content_type: &'static str,
	body: Vec<u8>,
) -> Result<StatusCode, reqwest::Error> {
	let res = client
		.post(endpoint)
		.header(CONTENT_TYPE, content_type)
		.body(body)
		.send()
		.await?;

	Ok(res.status())
}
