//! Global CSS styles for the Tilt Card demo.
//!
//! Colors mirror `theme::colors`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --backdrop: #111111;
  --surface: #222222;
  --cyan: #00ffff;
  --text-primary: #ffffff;
  --text-muted: #aaaaaa;

  --font-sans: 'Inter', 'Helvetica Neue', Arial, sans-serif;

  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  background: var(--backdrop);
  color: var(--text-primary);
  min-height: 100vh;
  overflow: hidden;
}

/* === Layout === */
.page {
  display: flex;
  flex-direction: column;
  height: 100vh;
}

.stage {
  flex: 1;
  display: flex;
  align-items: center;
  justify-content: center;
  perspective: 1200px;
}

.stage--split {
  gap: 3rem;
}

.stage__column {
  display: flex;
  align-items: center;
  justify-content: center;
}

/* === Navigation === */
.nav-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem 2rem;
  border-bottom: 1px solid var(--surface);
}

.nav-title {
  font-weight: 700;
  letter-spacing: 0.08em;
}

.nav-links {
  display: flex;
  gap: 1.5rem;
}

.nav-link {
  color: var(--text-muted);
  text-decoration: none;
  transition: color var(--transition-fast);
}

.nav-link:hover,
.nav-link.active {
  color: var(--text-primary);
}

/* === Card Face === */
.card-face__circle {
  width: 100px;
  height: 100px;
  border-radius: 50%;
  margin-bottom: 20px;
  opacity: 0.8;
}

.card-face__title {
  font-size: 32px;
  font-weight: 700;
  text-shadow: -1px 1px 10px rgba(0, 0, 0, 0.75);
}

.card-face__subtitle {
  color: var(--text-muted);
  font-size: 18px;
  margin-top: 10px;
}
"#;
