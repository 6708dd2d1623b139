use std::fmt::{Debug, Display};

use serde::de::DeserializeOwned;
use serde::Serialize;

pub struct Client {
    client: reqwest::Client,
}

impl Client {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub async fn post_json(
        &self,
        url: &str,
        body: &(impl Serialize + Debug),
    ) -> Result<Response, Error> {
        log::trace!("sending post request to {}: {:?}", url, body);

        let res: Response = self.client.post(url).json(body).send().await?.into();

        log::trace!(
            "received response from post request to {}: {:?}",
            url,
            res
        );

        Ok(res)
    }

    pub async fn get(
        &self,
        url: &str,
        query: Option<&(impl Serialize + Debug)>,
    ) -> Result<Response, Error> {
        log::trace!("sending get request to {}: {:?}", url, query);

        let mut req = self.client.get(url);

        if let Some(query) = query {
            req = req.query(query);
        }

        let res: Response = req.send().await?.into();

        log::trace!(
            "received response from get request to {}: {:?}",
            url,
            res
        );

        Ok(res)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct Response {
    response: reqwest::Response,
}

impl Response {
    pub fn is_success(&self) -> bool {
        self.response.status().is_success()
    }

    pub fn status(&self) -> u16 {
        self.response.status().as_u16()
    }

    pub async fn text(self) -> Result<String, Error> {
        self.response.text().await.map_err(|err| err.into())
    }

    pub async fn json<T: DeserializeOwned>(self) -> Result<T, Error> {
        let body = self.text().await?;
        serde_json::from_str(&body).map_err(|err| err.into())
    }
}

impl From<reqwest::Response> for Response {
    fn from(response: reqwest::Response) -> Self {
        Self { response }
    }
}

#[derive(Debug)]
pub struct Error {
    pub message: String,
}

impl<T: Display> From<T> for Error {
    fn from(err: T) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}
