//! Global CSS styles for Folio.
//!
//! Colors come from the custom properties in [`super::theme_variables`];
//! nothing here names a theme directly except the particle and glass tints.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 3rem;
  --text-hero: 4.5rem;

  --radius: 0.75rem;
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 500ms ease;
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
}

body {
  font-family: var(--font-sans);
  line-height: 1.6;
  min-height: 100vh;
}

a { color: inherit; text-decoration: none; }

/* === Site Shell === */
.site {
  min-height: 100vh;
  background: var(--bg);
  color: var(--text);
  display: flex;
  flex-direction: column;
  position: relative;
  overflow-x: hidden;
  transition: background var(--transition-normal), color var(--transition-normal);
}

.site::before {
  content: '';
  position: fixed;
  inset: 0;
  background: radial-gradient(circle at center, var(--glow) 0%, transparent 70%);
  opacity: 0.3;
  pointer-events: none;
}

.site-main {
  position: relative;
  z-index: 1;
  flex: 1;
  width: 100%;
  max-width: 80rem;
  margin: 0 auto;
  padding: 4rem 1.5rem;
}

.glass {
  background: var(--glass);
  backdrop-filter: blur(16px);
  border: 1px solid var(--glow);
  border-radius: var(--radius);
  box-shadow: 0 0 15px var(--glow);
}

/* === Ambient Backdrop === */
.ambient { position: relative; }

.ambient-field {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
  opacity: 0.5;
  pointer-events: none;
}

.ambient-field circle { fill: var(--particle); }

.ambient-content {
  position: relative;
  z-index: 1;
}

/* === Header === */
.nav-header {
  position: relative;
  z-index: 20;
  padding: 2rem 1.5rem;
}

.nav-header-inner {
  display: flex;
  align-items: center;
  justify-content: space-between;
  max-width: 80rem;
  margin: 0 auto;
  padding: 1rem 1.5rem;
  background: var(--glass);
  backdrop-filter: blur(16px);
  border: 1px solid var(--glow);
  border-radius: 9999px;
  box-shadow: 0 0 20px var(--glow);
}

.logo-text {
  font-size: var(--text-2xl);
  font-weight: 800;
  letter-spacing: -0.02em;
  background: linear-gradient(90deg, var(--accent), var(--text));
  -webkit-background-clip: text;
  color: transparent;
  text-shadow: 0 3px 6px var(--glow);
}

.nav-links {
  display: flex;
  gap: 2rem;
}

.nav-link {
  position: relative;
  font-size: var(--text-lg);
  font-weight: 600;
  color: var(--text-muted);
  transition: color var(--transition-normal);
}

.nav-link:hover, .nav-link.active { color: var(--accent); }

.nav-link-underline {
  position: absolute;
  left: 0;
  bottom: -6px;
  width: 0;
  height: 3px;
  background: var(--accent);
  transition: width var(--transition-slow);
}

.nav-link:hover .nav-link-underline,
.nav-link.active .nav-link-underline { width: 100%; }

.nav-actions {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.menu-toggle {
  display: none;
  background: none;
  border: none;
  color: var(--accent);
  cursor: pointer;
}

.mobile-menu {
  margin-top: 1rem;
  padding: 1.5rem;
  background: var(--glass);
  backdrop-filter: blur(16px);
  border-radius: var(--radius);
  box-shadow: 0 0 15px var(--glow);
}

.mobile-menu ul {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.neon-border {
  position: absolute;
  left: 0;
  right: 0;
  bottom: 0;
  height: 3px;
  background: linear-gradient(90deg, transparent, var(--accent), transparent);
  opacity: 0.5;
  animation: neon 3s infinite alternate ease-in-out;
}

@keyframes neon {
  0% { opacity: 0.5; transform: scaleX(0.8); }
  100% { opacity: 1; transform: scaleX(1); }
}

@media (max-width: 768px) {
  .nav-links { display: none; }
  .menu-toggle { display: inline-flex; }
}

@media (min-width: 769px) {
  .mobile-menu { display: none; }
}

/* === Buttons === */
.btn-primary, .btn-ghost, .btn-icon {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  border: none;
  cursor: pointer;
  font: inherit;
  transition: transform var(--transition-normal), background var(--transition-normal),
    box-shadow var(--transition-normal);
}

.btn-primary {
  padding: 1rem 2rem;
  font-size: var(--text-lg);
  font-weight: 600;
  color: #ffffff;
  background: var(--accent);
  border-radius: 9999px;
  box-shadow: 0 0 15px var(--glow);
}

.btn-primary:hover { transform: scale(1.05); }

.btn-primary.disabled, .btn-primary:disabled {
  opacity: 0.6;
  cursor: not-allowed;
  transform: none;
}

.btn-ghost {
  padding: 0.5rem 1rem;
  background: transparent;
  color: var(--text-muted);
  border-radius: var(--radius);
}

.btn-ghost:hover { color: var(--accent); }

.btn-icon {
  padding: 0.5rem;
  border-radius: 9999px;
  color: #ffffff;
  background: var(--accent);
  box-shadow: 0 0 10px var(--glow);
}

/* === Particles === */
.particle-anchor {
  position: relative;
  display: inline-block;
}

.particle-layer {
  position: absolute;
  inset: 0;
  pointer-events: none;
}

.particle {
  position: absolute;
  left: 50%;
  top: 50%;
  width: 0.5rem;
  height: 0.5rem;
  margin: -0.25rem 0 0 -0.25rem;
  border-radius: 9999px;
  background: var(--particle);
}

.particle-burst {
  animation-name: particle-burst;
  animation-timing-function: ease-out;
  animation-fill-mode: forwards;
}

@keyframes particle-burst {
  from { transform: translate(0, 0); opacity: 1; }
  to { transform: translate(var(--dx), var(--dy)); opacity: 0; }
}

.particle-fade { transition: opacity 50ms linear; }

/* === Typewriter === */
.typewriter-cursor {
  margin-left: 0.1em;
  animation: cursor-blink 0.7s infinite;
}

@keyframes cursor-blink {
  0%, 100% { opacity: 1; }
  50% { opacity: 0; }
}

/* === Page Sections === */
.page { display: flex; flex-direction: column; gap: 4rem; }

.hero { text-align: center; }

.hero-title {
  font-size: var(--text-hero);
  font-weight: 800;
  letter-spacing: -0.02em;
  margin-bottom: 1.5rem;
  color: var(--accent);
  text-shadow: 0 2px 4px var(--glow);
}

.hero-tagline {
  font-size: var(--text-xl);
  color: var(--text-muted);
  max-width: 48rem;
  margin: 0 auto;
}

.section-title {
  font-size: var(--text-3xl);
  font-weight: 700;
  text-align: center;
  color: var(--accent);
  margin-bottom: 2rem;
}

.cta { text-align: center; }

/* === Cube === */
.cube-stage {
  display: flex;
  justify-content: center;
}

.wire-cube {
  position: relative;
  display: flex;
  flex-direction: column;
  align-items: center;
}

.cube-edge {
  stroke: var(--accent);
  stroke-width: 2;
  filter: drop-shadow(0 0 4px var(--glow));
}

.cube-spark { fill: var(--particle); }

.cube-notice {
  position: absolute;
  bottom: 1rem;
  font-size: var(--text-sm);
  color: var(--text-muted);
}

/* === Skills === */
.skills-grid {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 1rem;
}

.skill-card {
  width: 10rem;
  padding: 1rem;
  text-align: center;
  transition: transform var(--transition-slow);
}

.skill-card:hover { transform: scale(1.1); }

.skill-bar {
  margin-top: 0.5rem;
  height: 0.5rem;
  border-radius: 9999px;
  background: var(--glass);
  overflow: hidden;
}

.skill-bar-fill {
  height: 100%;
  background: var(--accent);
  transition: width 1.5s ease-out;
}

/* === Reveal on entry === */
.reveal {
  opacity: 0;
  transform: translateY(50px);
  transition: opacity 0.8s ease-out, transform 0.8s ease-out;
}

.reveal.visible {
  opacity: 1;
  transform: none;
}

/* === Projects === */
.category-pills {
  display: flex;
  justify-content: center;
  gap: 1rem;
}

.pill {
  padding: 0.5rem 1.5rem;
  border-radius: 9999px;
  border: none;
  font: inherit;
  font-size: var(--text-lg);
  font-weight: 600;
  cursor: pointer;
  background: var(--glass);
  color: var(--text-muted);
  transition: all var(--transition-normal);
}

.pill:hover { background: var(--accent); color: #ffffff; }

.pill.selected {
  background: var(--accent);
  color: #ffffff;
  box-shadow: 0 0 15px var(--glow);
}

.pill:disabled { opacity: 0.4; cursor: default; }
.pill:disabled:hover { background: var(--glass); color: var(--text-muted); }

.pill-count {
  margin-left: 0.5rem;
  font-size: var(--text-sm);
  opacity: 0.7;
}

.project-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr));
  gap: 2rem;
}

.project-card {
  padding: 1.5rem;
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.project-card:hover {
  transform: translateY(-10px) scale(1.03);
  box-shadow: 0 0 25px var(--glow);
}

.project-image {
  width: 100%;
  height: 10rem;
  object-fit: cover;
  border-radius: 0.5rem;
  margin-bottom: 1rem;
}

.project-category {
  font-size: var(--text-sm);
  font-family: var(--font-mono);
  color: var(--text-muted);
}

.project-title {
  font-size: var(--text-2xl);
  color: var(--accent);
  margin-bottom: 0.5rem;
}

.project-description {
  color: var(--text-muted);
  margin-bottom: 1rem;
}

.project-link { color: var(--accent); }

.empty-hint {
  grid-column: 1 / -1;
  text-align: center;
  color: var(--text-muted);
}

/* === About === */
.about-intro {
  display: flex;
  align-items: center;
  gap: 2rem;
}

.avatar {
  width: 12rem;
  height: 12rem;
}

.avatar-image {
  width: 100%;
  height: 100%;
  border-radius: 9999px;
  border: 4px solid var(--accent);
  box-shadow: 0 0 15px var(--glow);
  object-fit: cover;
  animation: avatar-spin 10s linear infinite;
}

.avatar-initials {
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: var(--text-3xl);
  font-weight: 800;
  color: var(--accent);
  background: var(--glass);
}

@keyframes avatar-spin {
  from { transform: rotateY(0deg); }
  to { transform: rotateY(360deg); }
}

.about-bio { font-size: var(--text-xl); color: var(--text-muted); }
.about-details { margin-top: 1rem; color: var(--text-muted); }

.timeline { position: relative; }

.timeline-line {
  position: absolute;
  left: 50%;
  width: 3px;
  height: 100%;
  transform: translateX(-50%);
  background: var(--accent);
}

.timeline-entry {
  position: relative;
  display: flex;
  align-items: center;
  margin-bottom: 2rem;
}

.timeline-entry.left { justify-content: flex-start; }
.timeline-entry.left .timeline-body { text-align: right; padding-right: 1rem; }
.timeline-entry.right { justify-content: flex-end; }
.timeline-entry.right .timeline-body { text-align: left; padding-left: 1rem; }

.timeline-body { width: 42%; }
.timeline-year { font-size: var(--text-xl); color: var(--accent); }
.timeline-event { color: var(--text-muted); }

.timeline-dot {
  position: absolute;
  left: 50%;
  width: 0.75rem;
  height: 0.75rem;
  transform: translateX(-50%);
  border-radius: 9999px;
  background: var(--accent);
}

@media (max-width: 768px) {
  .about-intro { flex-direction: column; }
  .hero-title { font-size: var(--text-3xl); }
}

/* === Contact === */
.contact-panel {
  max-width: 42rem;
  width: 100%;
  margin: 0 auto;
  padding: 2rem;
}

.contact-form {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.input-label {
  display: block;
  font-size: var(--text-lg);
  font-weight: 600;
}

.input-field {
  width: 100%;
  margin-top: 0.5rem;
  padding: 0.75rem;
  font: inherit;
  color: var(--text);
  background: var(--glass);
  border: 1px solid var(--glow);
  border-radius: 0.5rem;
  transition: box-shadow var(--transition-fast);
}

.input-field:focus {
  outline: none;
  box-shadow: 0 0 0 2px var(--accent);
}

.input-field.invalid { border-color: var(--danger); }

.textarea { resize: vertical; }

.field-error {
  margin-top: 0.25rem;
  font-size: var(--text-sm);
  color: var(--danger);
}

.form-actions { text-align: center; }

/* === Socials === */
.social-links {
  display: flex;
  justify-content: center;
  gap: 1.5rem;
}

.social-link {
  color: var(--accent);
  filter: drop-shadow(0 0 5px var(--glow));
  transition: transform var(--transition-normal);
}

.social-link:hover { transform: scale(1.2) rotate(5deg); }

/* === Footer === */
.site-footer {
  position: relative;
  z-index: 1;
  padding: 2rem 1.5rem;
  background: var(--glass);
  backdrop-filter: blur(16px);
  border-top: 1px solid var(--glow);
  box-shadow: 0 0 20px var(--glow);
}

.footer-inner {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  justify-content: space-between;
  gap: 2rem;
  max-width: 80rem;
  margin: 0 auto;
}

.copyright {
  font-size: var(--text-sm);
  color: var(--accent);
}
"#;
