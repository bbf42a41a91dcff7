use crate::catalog::{tip_id, Tip, CATALOG};
use crate::models::AppData;
use crate::progress;

pub fn render_index(data: &AppData) -> String {
    let snapshot = progress::snapshot(data);

    let mut tabs = String::new();
    let mut panes = String::new();
    for (index, category) in CATALOG.iter().enumerate() {
        let active = if index == 0 { " active" } else { "" };
        let selected = index == 0;
        tabs.push_str(&format!(
            r##"<button class="tab{active}" type="button" data-tab="{name}" role="tab" aria-selected="{selected}">{name}</button>"##,
            name = category.name,
        ));
        panes.push_str(&format!(
            r##"<div class="tab-pane{active}" id="pane-{name}">"##,
            name = category.name,
        ));
        for tip in category.tips {
            panes.push_str(&render_card(tip, data));
        }
        panes.push_str("</div>");
    }

    let star_display = if data.prize_claimed { "inline-block" } else { "none" };

    INDEX_HTML
        .replace("{{TABS}}", &tabs)
        .replace("{{PANES}}", &panes)
        .replace("{{PROGRESS_LABEL}}", &snapshot.label)
        .replace("{{RING_OFFSET}}", &format!("{:.2}", snapshot.ring_offset))
        .replace("{{RING_COLOR}}", &snapshot.color)
        .replace("{{STAR_DISPLAY}}", star_display)
}

/// Title text is escaped; descriptions are trusted catalog markup and pass
/// through as-is.
fn render_card(tip: &Tip, data: &AppData) -> String {
    let id = tip_id(tip.title);
    let done = data.is_done(&id);
    let checked = if done { " checked" } else { "" };
    let icon_display = if done { "inline" } else { "none" };
    format!(
        r##"<div class="card">
  <div class="card-head">
    <h3 class="card-title">{title}</h3>
    <span class="check-icon" id="check-{id}" style="display: {icon_display};">&#10003;</span>
  </div>
  <p class="card-text">{description}</p>
  <label class="form-check">
    <input class="tip-toggle" type="checkbox" data-tip-id="{id}"{checked} />
    <span>I did it!</span>
  </label>
</div>
"##,
        title = escape_html(tip.title),
        description = tip.description,
    )
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Best Practices Checklist</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --done: #2d7a4b;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      padding: 96px 18px 48px;
      display: flex;
      justify-content: center;
    }

    .navbar {
      position: fixed;
      top: 0;
      left: 0;
      right: 0;
      z-index: 10;
      display: flex;
      align-items: center;
      justify-content: space-between;
      padding: 14px 28px;
      transition: background 200ms ease, box-shadow 200ms ease;
    }

    .navbar.scrolled {
      background: var(--card);
      backdrop-filter: blur(12px);
      box-shadow: 0 8px 24px rgba(47, 72, 88, 0.12);
    }

    .brand {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: 1.2rem;
    }

    .nav-links {
      list-style: none;
      display: flex;
      align-items: center;
      gap: 18px;
      margin: 0;
      padding: 0;
    }

    .nav-links li:first-child {
      display: none;
    }

    .nav-links a {
      color: var(--accent-2);
      text-decoration: none;
      font-weight: 600;
    }

    .star-icon {
      color: #e6a817;
      font-size: 1.3rem;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 18px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 6px 0 0;
      color: #5f5c57;
      font-size: 1rem;
    }

    .progress-track {
      fill: none;
      stroke: rgba(47, 72, 88, 0.12);
      stroke-width: 10;
    }

    .progress-ring {
      fill: none;
      stroke-width: 10;
      stroke-linecap: round;
      transition: stroke-dashoffset 0.5s ease, stroke 0.5s ease;
    }

    .progress-text {
      font-weight: 600;
      font-size: 20px;
      fill: var(--accent-2);
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
      width: fit-content;
    }

    .tab {
      appearance: none;
      cursor: pointer;
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 8px 14px;
      font-size: 0.9rem;
      font-weight: 600;
      color: #6b645d;
    }

    .tab.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    .tab-pane {
      display: none;
    }

    .tab-pane.active {
      display: grid;
      gap: 16px;
    }

    .card {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .card-head {
      display: flex;
      align-items: baseline;
      justify-content: space-between;
      gap: 12px;
    }

    .card-title {
      margin: 0;
      font-size: 1.1rem;
      color: var(--accent-2);
    }

    .check-icon {
      color: var(--done);
      font-weight: 700;
      font-size: 1.2rem;
    }

    .card-text {
      margin: 0;
      color: #5f5c57;
      font-size: 0.95rem;
    }

    .form-check {
      display: inline-flex;
      align-items: center;
      gap: 8px;
      justify-self: end;
      font-weight: 600;
      color: var(--accent-2);
      cursor: pointer;
    }

    .tip-toggle {
      width: 18px;
      height: 18px;
      accent-color: var(--accent);
    }

    .alert {
      background: #fdecea;
      border: 1px solid #c63b2b;
      color: #c63b2b;
      border-radius: 12px;
      padding: 12px 16px;
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    .alert button {
      appearance: none;
      border: none;
      background: transparent;
      color: inherit;
      font-size: 1rem;
      font-weight: 700;
      cursor: pointer;
    }

    .modal-overlay {
      position: fixed;
      inset: 0;
      z-index: 20;
      display: none;
      align-items: center;
      justify-content: center;
      background: rgba(43, 42, 40, 0.55);
      padding: 24px;
    }

    .modal-overlay.open {
      display: flex;
    }

    .modal {
      background: white;
      border-radius: 20px;
      box-shadow: var(--shadow);
      padding: 24px;
      width: min(520px, 100%);
      display: grid;
      gap: 14px;
      text-align: center;
    }

    .modal h2 {
      margin: 0;
      font-family: "Fraunces", "Georgia", serif;
    }

    .modal img {
      max-width: 100%;
      border-radius: 12px;
    }

    .modal .attribution {
      margin: 0;
      color: #6b645d;
      font-size: 0.9rem;
    }

    .modal .close {
      justify-self: center;
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 22px;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent-2);
      color: white;
    }

    .spinner {
      margin: 24px auto;
      width: 36px;
      height: 36px;
      border: 4px solid rgba(47, 72, 88, 0.15);
      border-top-color: var(--accent);
      border-radius: 50%;
      animation: spin 800ms linear infinite;
    }

    @keyframes spin {
      to {
        transform: rotate(360deg);
      }
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      header {
        justify-content: center;
      }
    }
  </style>
</head>
<body>
  <nav class="navbar">
    <span class="brand">Best Practices</span>
    <ul class="nav-links">
      <li><a href="#top">Home</a></li>
      <li><span class="star-icon" id="starIcon" style="display: {{STAR_DISPLAY}};">&#9733;</span></li>
    </ul>
  </nav>

  <main class="app" id="top">
    <header>
      <div>
        <h1>Best Practices Checklist</h1>
        <p class="subtitle">Tick off each tip as you adopt it. Reach 80% for a surprise.</p>
      </div>
      <svg width="120" height="120" viewBox="0 0 120 120" role="img" aria-label="Completion progress">
        <circle class="progress-track" cx="60" cy="60" r="45" />
        <circle class="progress-ring" cx="60" cy="60" r="45" transform="rotate(-90 60 60)"
          stroke-dasharray="283" stroke-dashoffset="{{RING_OFFSET}}" style="stroke: {{RING_COLOR}};" />
        <text class="progress-text" x="60" y="67" text-anchor="middle">{{PROGRESS_LABEL}}</text>
      </svg>
    </header>

    <div id="alertPlaceholder"></div>

    <div class="tabs" role="tablist">
      {{TABS}}
    </div>

    <div class="tab-content">
      {{PANES}}
    </div>
  </main>

  <div class="modal-overlay" id="prizeModal">
    <div class="modal" role="dialog" aria-modal="true">
      <h2>You earned a prize!</h2>
      <div id="prizeImage"><div class="spinner" role="status"></div></div>
      <p class="attribution" id="prizeAttribution"></p>
      <button class="close" type="button" id="prizeClose">Close</button>
    </div>
  </div>

  <script>
    const ringEl = document.querySelector('.progress-ring');
    const textEl = document.querySelector('.progress-text');
    const starEl = document.getElementById('starIcon');
    const alertPlaceholder = document.getElementById('alertPlaceholder');
    const modalEl = document.getElementById('prizeModal');
    const prizeImageEl = document.getElementById('prizeImage');
    const prizeAttributionEl = document.getElementById('prizeAttribution');

    const applyProgress = (progress) => {
      ringEl.style.strokeDashoffset = progress.ring_offset;
      ringEl.style.stroke = progress.color;
      textEl.textContent = progress.label;
      if (progress.prize_claimed) {
        starEl.style.display = 'inline-block';
      }
    };

    const appendAlert = (message) => {
      const wrapper = document.createElement('div');
      wrapper.className = 'alert';
      wrapper.setAttribute('role', 'alert');
      const text = document.createElement('div');
      text.textContent = message;
      const close = document.createElement('button');
      close.type = 'button';
      close.textContent = '×';
      close.addEventListener('click', () => wrapper.remove());
      wrapper.appendChild(text);
      wrapper.appendChild(close);
      alertPlaceholder.appendChild(wrapper);
    };

    const showPrize = (prize) => {
      prizeImageEl.innerHTML = '<div class="spinner" role="status"></div>';
      modalEl.classList.add('open');
      const img = document.createElement('img');
      img.addEventListener('load', () => {
        prizeImageEl.innerHTML = '';
        prizeImageEl.appendChild(img);
        prizeAttributionEl.textContent = 'From: ' + prize.artist;
      });
      img.alt = 'From: ' + prize.artist;
      img.src = prize.url;
    };

    document.getElementById('prizeClose').addEventListener('click', () => {
      modalEl.classList.remove('open');
    });
    modalEl.addEventListener('click', (event) => {
      if (event.target === modalEl) {
        modalEl.classList.remove('open');
      }
    });

    const sendToggle = async (id, done) => {
      const res = await fetch('/api/toggle', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ id, done })
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    document.querySelectorAll('.tip-toggle').forEach((checkbox) => {
      checkbox.addEventListener('change', () => {
        const id = checkbox.dataset.tipId;
        const icon = document.getElementById('check-' + id);
        sendToggle(id, checkbox.checked)
          .then((result) => {
            icon.style.display = result.checked ? 'inline' : 'none';
            applyProgress(result.progress);
            if (result.prize) {
              showPrize(result.prize);
            }
            if (result.alert) {
              appendAlert(result.alert);
            }
          })
          .catch((err) => {
            checkbox.checked = !checkbox.checked;
            appendAlert(err.message);
          });
      });
    });

    const tabs = Array.from(document.querySelectorAll('.tab'));
    tabs.forEach((button) => {
      button.addEventListener('click', () => {
        tabs.forEach((other) => {
          const isActive = other === button;
          other.classList.toggle('active', isActive);
          other.setAttribute('aria-selected', String(isActive));
        });
        document.querySelectorAll('.tab-pane').forEach((pane) => {
          pane.classList.toggle('active', pane.id === 'pane-' + button.dataset.tab);
        });
      });
    });

    const navbar = document.querySelector('.navbar');
    const navHomeBtn = document.querySelector('.nav-links li:first-child');
    window.addEventListener('scroll', () => {
      if (window.scrollY > 50) {
        navbar.classList.add('scrolled');
        navHomeBtn.style.display = 'block';
      } else {
        navbar.classList.remove('scrolled');
        navHomeBtn.style.display = 'none';
      }
    });
  </script>
</body>
</html>
"##;
