// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Implementation of the `serve` command.

use std::sync::Arc;

use tracing::info;

use lume_api::{ApiConfig, ApiServer};

use crate::cli::{Cli, ServeArgs};
use crate::error::BinResult;
use crate::shutdown::shutdown_signal;

/// Executes the `serve` command to start the compile API server.
pub async fn serve(cli: &Cli, args: ServeArgs) -> BinResult<()> {
    let registry = lume_config::load_registry(&cli.config)?;

    let mut config = ApiConfig::default();
    if let Some(bind) = args.bind {
        config.bind_address = bind;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    info!(
        config = %cli.config.display(),
        devices = registry.len(),
        "starting LUME API server"
    );

    let server = ApiServer::new(Arc::new(registry), config);
    server.run_with_shutdown(shutdown_signal()).await?;

    info!("server stopped");
    Ok(())
}
