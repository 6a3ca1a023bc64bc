use crate::GameId;
use crate::StrategyId;
use crate::api::*;
use crate::arena::Address;
use crate::session::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::sync::RwLock;

/// One live session and the game it plays.
pub struct Table {
    game: Game,
    state: GamePlayState,
}

/// Body of `POST /sessions`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartRequest {
    #[serde(flatten)]
    pub game: GameRef,
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub p_strategy_id: Option<StrategyId>,
    #[serde(default)]
    pub o_strategy_id: Option<StrategyId>,
}

/// Body of `POST /sessions/{game_id}/move`.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionMove {
    #[serde(rename = "move")]
    pub address: Address,
}

/// No session is open for this game.
#[derive(Debug)]
pub struct Vacant(pub GameId);

impl std::fmt::Display for Vacant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "no session for game {}", self.0)
    }
}

impl std::error::Error for Vacant {}

/// Owns the service and every live session.
///
/// Each session sits behind its own mutex, so moves on one game are
/// serialised while other games proceed. Simulations run on the blocking
/// pool against a shared read lock of the service.
#[derive(Default)]
pub struct Casino {
    service: Arc<std::sync::RwLock<Service>>,
    tables: RwLock<HashMap<GameId, Arc<Mutex<Table>>>>,
}

impl Casino {
    /// run a service call off the async workers
    pub async fn compute<T, F>(&self, f: F) -> anyhow::Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Service) -> Result<T, ApiError> + Send + 'static,
    {
        let service = self.service.clone();
        tokio::task::spawn_blocking(move || {
            let service = service
                .read()
                .map_err(|_| anyhow::anyhow!("service lock poisoned"))?;
            f(&*service).map_err(anyhow::Error::from)
        })
        .await?
    }

    /// check the strategy on the blocking pool, then lock only to store it
    pub async fn register(&self, request: RegisterRequest) -> anyhow::Result<()> {
        let id = request.strategy.id().to_string();
        let game = request.game.game_id.clone();
        let request = self
            .compute(move |service| service.admit(&request).map(|_| request))
            .await?;
        self.service
            .write()
            .map_err(|_| anyhow::anyhow!("service lock poisoned"))?
            .store(request);
        log::info!("[casino] registered {} for {}", id, game);
        Ok(())
    }

    /// open a session, replacing any earlier one for the same game
    pub async fn open(&self, request: StartRequest) -> anyhow::Result<GamePlayState> {
        let (game, state) = self
            .compute(move |service| {
                let game = service.game(&request.game)?;
                let mut state =
                    game.start(request.mode, request.p_strategy_id, request.o_strategy_id)?;
                if state.mode != Mode::Auto {
                    Arbiter::new(&game).run(&mut state)?;
                }
                Ok((game, state))
            })
            .await?;
        let id = game.id().to_string();
        let table = Table {
            game,
            state: state.clone(),
        };
        self.tables
            .write()
            .await
            .insert(id.clone(), Arc::new(Mutex::new(table)));
        log::info!("[casino] opened session {}", id);
        Ok(state)
    }

    pub async fn close(&self, id: &str) -> anyhow::Result<()> {
        self.tables
            .write()
            .await
            .remove(id)
            .map(|_| log::info!("[casino] closed session {}", id))
            .ok_or_else(|| Vacant(id.to_string()).into())
    }

    async fn table(&self, id: &str) -> anyhow::Result<Arc<Mutex<Table>>> {
        self.tables
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| Vacant(id.to_string()).into())
    }

    /// run `f` on the blocking pool, holding the table's lock throughout
    async fn seated<T, F>(&self, id: &str, f: F) -> anyhow::Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Table) -> anyhow::Result<T> + Send + 'static,
    {
        let table = self.table(id).await?;
        tokio::task::spawn_blocking(move || {
            let mut guard = table.blocking_lock();
            f(&mut *guard)
        })
        .await?
    }

    pub async fn state(&self, id: &str) -> anyhow::Result<GamePlayState> {
        Ok(self.table(id).await?.lock().await.state.clone())
    }

    /// a manual move, then any automated replies
    pub async fn play(&self, id: &str, address: &Address) -> anyhow::Result<GamePlayState> {
        let address = address.clone();
        self.seated(id, move |Table { game, state }| {
            let m = game.engine().resolve(&address)?.clone();
            let arbiter = Arbiter::new(game);
            arbiter.next_move(state, Some(&m))?;
            if state.mode != Mode::Auto && !state.is_over() {
                arbiter.run(state)?;
            }
            Ok(state.clone())
        })
        .await
    }

    /// let the arbiter resolve exactly one move
    pub async fn step(&self, id: &str) -> anyhow::Result<GamePlayState> {
        let name = id.to_string();
        self.seated(id, move |Table { game, state }| {
            let decision = Arbiter::new(game).next_move(state, None)?;
            log::debug!("[casino] {} step: {:?}", name, decision);
            Ok(state.clone())
        })
        .await
    }

    pub async fn undo(&self, id: &str) -> anyhow::Result<GamePlayState> {
        self.seated(id, |Table { game, state }| {
            state.undo(game.engine())?;
            Ok(state.clone())
        })
        .await
    }

    pub async fn reset(&self, id: &str) -> anyhow::Result<GamePlayState> {
        self.seated(id, |Table { game, state }| {
            *state = state.reset(game.engine());
            if state.mode != Mode::Auto {
                Arbiter::new(game).run(state)?;
            }
            Ok(state.clone())
        })
        .await
    }

    pub async fn abandon(&self, id: &str) -> anyhow::Result<GamePlayState> {
        let table = self.table(id).await?;
        let mut guard = table.lock().await;
        guard.state.abandon()?;
        Ok(guard.state.clone())
    }
}
