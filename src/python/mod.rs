//! Python bindings for the line game engine.
//!
//! # Quick Start
//!
//! ```python
//! import tictactoe_pro as ttt
//!
//! engine = ttt.GameEngine(grid_size=5, player_count=3)
//! engine.apply_move(12)
//! print(engine)
//! print(engine.status())
//!
//! result, line = ttt.evaluate_board(3, [0, 0, 0, 1, 1, None, None, None, None])
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_engine;

pub use py_core::*;
pub use py_engine::*;

/// tictactoe_pro: NxN line games for 2 to 4 players.
#[pymodule]
fn tictactoe_pro(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPlayerId>()?;
    m.add_class::<PyGameResult>()?;
    m.add_class::<PyGameEngine>()?;
    m.add_function(wrap_pyfunction!(evaluate_board, m)?)?;
    Ok(())
}
