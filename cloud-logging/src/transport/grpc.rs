use super::{CallContext, Transport};
use crate::config::ClientConfig;
use crate::credentials::Authorizer;
use crate::error::{Code, Error, Result};
use crate::internal_logging::logging_debug;
use crate::rpc::{Rpc, StreamingRpc};
use async_trait::async_trait;
use futures_util::stream::{BoxStream, StreamExt};
use http::header::USER_AGENT;
use http::uri::PathAndQuery;
use std::fmt;
use tonic::client::Grpc;
use tonic::metadata::MetadataMap;
use tonic::transport::Channel;
#[cfg(feature = "tls")]
use tonic::transport::{ClientTlsConfig, Identity};
use tonic_prost::ProstCodec;

/// Protobuf over HTTP/2 through a lazily connected tonic channel.
#[derive(Clone)]
pub struct GrpcTransport {
    channel: Channel,
    authorizer: Authorizer,
}

impl fmt::Debug for GrpcTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrpcTransport")
            .field("authorizer", &self.authorizer)
            .finish_non_exhaustive()
    }
}

impl GrpcTransport {
    fn request<M>(&self, message: M, context: &CallContext) -> tonic::Request<M> {
        let mut headers = context.headers.clone();
        // tonic sets its own user-agent from the endpoint
        headers.remove(USER_AGENT);
        let mut request = tonic::Request::from_parts(
            MetadataMap::from_headers(headers),
            Default::default(),
            message,
        );
        if let Some(timeout) = context.timeout {
            request.set_timeout(timeout);
        }
        request
    }

    async fn client(&self, context: &CallContext) -> Result<(Grpc<Channel>, CallContext)> {
        let mut context = context.clone();
        self.authorizer.authorize(&mut context.headers).await?;
        let mut client = Grpc::new(self.channel.clone());
        client.ready().await.map_err(|err| {
            Error::status(Code::Unavailable, format!("service was not ready: {err}"))
        })?;
        Ok((client, context))
    }
}

#[async_trait]
impl Transport for GrpcTransport {
    async fn connect(config: &ClientConfig) -> Result<Self> {
        let uri = config.base_url("https");
        let mut endpoint = Channel::from_shared(uri.clone())
            .map_err(|err| Error::Config(format!("invalid endpoint {uri}: {err}")))?
            .user_agent(config.user_agent().to_string())
            .map_err(|err| Error::Config(format!("invalid user agent: {err}")))?;

        #[cfg(feature = "tls")]
        if uri.starts_with("https://") {
            let mut tls = ClientTlsConfig::new().with_native_roots();
            if let Some(certificate) = &config.client_certificate {
                tls = tls.identity(Identity::from_pem(
                    &certificate.cert_pem,
                    &certificate.key_pem,
                ));
            }
            endpoint = endpoint
                .tls_config(tls)
                .map_err(|err| Error::Config(format!("invalid TLS configuration: {err}")))?;
        }

        if let Some(timeout) = config.connect_timeout {
            endpoint = endpoint.connect_timeout(timeout);
        }

        let authorizer = Authorizer::new(&config.credentials, config.scopes.clone()).await?;
        logging_debug!(
            name: "GrpcChannel.Built",
            endpoint = uri.as_str(),
            mtls = config.uses_client_certificate(),
        );

        Ok(GrpcTransport {
            channel: endpoint.connect_lazy(),
            authorizer,
        })
    }

    async fn unary<R: Rpc>(&self, request: R::Request, context: &CallContext) -> Result<R::Response> {
        let (mut client, context) = self.client(context).await?;
        let mut request = self.request(request, &context);
        request
            .extensions_mut()
            .insert(tonic::GrpcMethod::new(R::SERVICE, R::METHOD));

        let response = client
            .unary(
                request,
                PathAndQuery::from_static(R::PATH),
                ProstCodec::<R::Request, R::Response>::default(),
            )
            .await?;
        Ok(response.into_inner())
    }

    async fn streaming<R: StreamingRpc>(
        &self,
        requests: BoxStream<'static, R::Request>,
        context: &CallContext,
    ) -> Result<BoxStream<'static, Result<R::Response>>> {
        let (mut client, context) = self.client(context).await?;
        let mut request = self.request(requests, &context);
        request
            .extensions_mut()
            .insert(tonic::GrpcMethod::new(R::SERVICE, R::METHOD));

        let response = client
            .streaming(
                request,
                PathAndQuery::from_static(R::PATH),
                ProstCodec::<R::Request, R::Response>::default(),
            )
            .await?;
        Ok(response
            .into_inner()
            .map(|message| message.map_err(Error::from))
            .boxed())
    }
}
