//! Built-in tutorial catalog.
//!
//! Every topic shipped with dockguide, in the order the tutorial presents
//! them. Bodies are Markdown; code samples are stored verbatim.

use dockguide_common::types::{CodeExample, ContentRecord, Difficulty};

/// Topic keys and records in catalog order.
pub const ENTRIES: &[(&str, ContentRecord)] = &[
    ("docker-desktop-intro", DOCKER_DESKTOP_INTRO),
    ("install-windows", INSTALL_WINDOWS),
    ("install-mac", INSTALL_MAC),
    ("install-linux", INSTALL_LINUX),
    ("docker-compose", DOCKER_COMPOSE),
    ("model-runner", MODEL_RUNNER),
    ("mcp-toolkit", MCP_TOOLKIT),
    ("docker-extensions", DOCKER_EXTENSIONS),
    ("docker-model-runner", DOCKER_MODEL_RUNNER),
];

const DOCKER_DESKTOP_INTRO: ContentRecord = ContentRecord {
    title: "What is Docker Desktop?",
    description: "Learn about Docker Desktop and its benefits for modern development",
    duration: "10 min read",
    difficulty: Difficulty::Beginner,
    content: r#"Docker Desktop is an all-in-one application that provides an intuitive GUI for managing Docker containers, images, and volumes. It simplifies container development and makes Docker accessible to developers of all skill levels.

## Why Docker Desktop?

Docker Desktop transforms the way developers work with containers by providing:

- **Visual Interface**: Manage containers, images, and volumes through an intuitive GUI
- **Integrated Development**: Built-in tools for development workflows
- **Cross-Platform**: Consistent experience across Windows, macOS, and Linux
- **Developer Tools**: Extensions, Docker Compose integration, and debugging tools

## Key Features

### Container Management
Docker Desktop provides a centralized dashboard to view, start, stop, and manage all your containers with just a few clicks.

### Image Repository
Browse and pull images from Docker Hub or other registries directly from the interface.

### Volume Management
Easily create, inspect, and manage Docker volumes for persistent data storage.

### Extensions Ecosystem
Access a rich marketplace of extensions that enhance your development workflow.
"#,
    code_example: Some(CodeExample {
        title: "Verify Docker Desktop Installation",
        description: "Check if Docker Desktop is running properly",
        code: r#"# Check Docker version
docker --version

# Check Docker Desktop is running
docker info

# Test with hello-world
docker run hello-world"#,
        language: "bash",
    }),
};

const INSTALL_WINDOWS: ContentRecord = ContentRecord {
    title: "Docker Desktop for Windows",
    description: "Complete installation guide for Windows 10/11",
    duration: "15 min",
    difficulty: Difficulty::Beginner,
    content: r#"Docker Desktop for Windows provides a seamless containerization experience on Windows 10 and 11. This guide walks you through the complete installation process.

## System Requirements

Before installing Docker Desktop, ensure your system meets these requirements:

- **Windows 10 64-bit**: Pro, Enterprise, or Education (Build 19041 or higher)
- **Windows 11 64-bit**: Home or Pro version 21H2 or higher
- **Hardware**: 4GB RAM minimum, 8GB recommended
- **BIOS**: Virtualization enabled
- **Features**: Hyper-V and Containers Windows features enabled

## Installation Steps

### Step 1: Download Docker Desktop
Visit the official Docker website and download Docker Desktop for Windows. The installer is approximately 500MB.

### Step 2: Run the Installer
Double-click the installer and follow these steps:
1. Accept the license agreement
2. Choose installation location (default recommended)
3. Select additional components if needed
4. Complete the installation

### Step 3: Enable WSL 2 Backend
Docker Desktop uses WSL 2 as the default backend for better performance:
1. Open Docker Desktop settings
2. Navigate to General settings
3. Ensure "Use WSL 2 based engine" is checked

## Post-Installation Setup

After installation, Docker Desktop will start automatically. You'll see the Docker whale icon in your system tray indicating it's running.
"#,
    code_example: Some(CodeExample {
        title: "Windows-Specific Docker Commands",
        description: "Essential commands for Docker Desktop on Windows",
        code: r#"# Check WSL 2 integration
wsl --list --verbose

# Set WSL 2 as default
wsl --set-default-version 2

# Restart Docker Desktop service
net stop com.docker.service
net start com.docker.service

# Check Docker Desktop status
docker system info"#,
        language: "bash",
    }),
};

const INSTALL_MAC: ContentRecord = ContentRecord {
    title: "Docker Desktop for macOS",
    description: "Complete installation guide for macOS",
    duration: "15 min",
    difficulty: Difficulty::Beginner,
    content: r#"Docker Desktop for macOS brings containerization to Apple's ecosystem with native performance and seamless integration.

## System Requirements

Ensure your Mac meets these requirements:

- **macOS**: Version 10.15 or newer
- **Hardware**: 4GB RAM minimum, 8GB recommended
- **Architecture**: Intel chip or Apple Silicon (M1/M2)
- **Storage**: At least 4GB of free disk space

## Installation Process

### Step 1: Choose the Right Version
Docker Desktop offers two variants:
- **Intel Chip**: For Macs with Intel processors
- **Apple Silicon**: For Macs with M1/M2 chips

### Step 2: Download and Install
1. Download the appropriate .dmg file from Docker's website
2. Double-click the downloaded file
3. Drag Docker.app to your Applications folder
4. Launch Docker from Applications

### Step 3: First-Time Setup
When you first launch Docker Desktop:
1. Accept the service agreement
2. Provide administrator password when prompted
3. Complete the onboarding tutorial

## macOS-Specific Features

### Native Performance
Docker Desktop leverages macOS's native virtualization framework for optimal performance.

### File Sharing
Configure which directories can be accessed by containers in Docker Desktop preferences.

### Resource Management
Adjust CPU, memory, and disk usage limits to optimize performance for your workflow.
"#,
    code_example: Some(CodeExample {
        title: "macOS Docker Commands",
        description: "Platform-specific commands and checks",
        code: r#"# Check Docker Desktop status
docker version

# View system resource usage
docker system df

# Configure file sharing (via GUI)
# Go to Docker Desktop > Preferences > Resources > File Sharing

# Reset Docker Desktop (if needed)
# Go to Docker Desktop > Troubleshoot > Reset to factory defaults"#,
        language: "bash",
    }),
};

const INSTALL_LINUX: ContentRecord = ContentRecord {
    title: "Docker Desktop for Linux",
    description: "Installation guide for Linux distributions",
    duration: "20 min",
    difficulty: Difficulty::Beginner,
    content: r#"Docker Desktop for Linux provides the same user experience as Windows and macOS, with full GUI support and native Linux integration.

## Supported Distributions

Docker Desktop supports these Linux distributions:
- **Ubuntu**: 18.04 LTS and newer
- **Debian**: 10 and newer
- **Fedora**: 35 and newer
- **Arch Linux**: Current release

## Prerequisites

Before installation, ensure you have:
- 64-bit processor with virtualization support
- KVM virtualization support
- systemd init system
- GNOME or KDE desktop environment

## Installation Steps

### Step 1: Update System Packages
Keep your system updated for the best compatibility.

### Step 2: Install Required Dependencies
Most distributions need additional packages for Docker Desktop to function properly.

### Step 3: Download and Install
Choose the appropriate package format for your distribution (DEB or RPM).

### Step 4: Configure User Permissions
Add your user to the docker group to run Docker commands without sudo.

## Post-Installation Configuration

### Enable Docker Service
Ensure Docker service starts automatically with your system.

### Configure Resources
Adjust memory, CPU, and storage allocations based on your system capabilities.

### Test Installation
Verify everything works correctly with a simple container test.
"#,
    code_example: Some(CodeExample {
        title: "Linux Installation Commands",
        description: "Step-by-step installation for Ubuntu/Debian",
        code: r#"# Update package index
sudo apt update

# Install prerequisites
sudo apt install -y ca-certificates curl gnupg lsb-release

# Add Docker GPG key
curl -fsSL https://download.docker.com/linux/ubuntu/gpg | sudo gpg --dearmor -o /usr/share/keyrings/docker-archive-keyring.gpg

# Download Docker Desktop DEB package
wget https://desktop.docker.com/linux/main/amd64/docker-desktop-4.25.0-amd64.deb

# Install Docker Desktop
sudo apt install ./docker-desktop-4.25.0-amd64.deb

# Add user to docker group
sudo usermod -aG docker $USER

# Verify installation
docker --version"#,
        language: "bash",
    }),
};

const DOCKER_COMPOSE: ContentRecord = ContentRecord {
    title: "Docker Compose with Docker Desktop",
    description: "Multi-container applications made easy",
    duration: "25 min",
    difficulty: Difficulty::Intermediate,
    content: r#"Docker Compose is included with Docker Desktop and allows you to define and run multi-container Docker applications using a simple YAML file.

## What is Docker Compose?

Docker Compose simplifies the process of managing multiple containers that work together. Instead of running multiple docker run commands, you define your entire application stack in a single file.

## Key Benefits

### Simplified Configuration
Define complex multi-container setups in a readable YAML format.

### Environment Management
Easily switch between development, testing, and production configurations.

### Service Discovery
Containers can communicate with each other using service names.

### Volume and Network Management
Automatically creates and manages networks and volumes for your application.

## Basic Docker Compose Workflow

1. **Define**: Create a docker-compose.yml file
2. **Build**: Run docker-compose up to start your services
3. **Manage**: Use docker-compose commands to control your application
4. **Scale**: Easily scale services up or down

## Docker Desktop Integration

Docker Desktop provides excellent Compose integration:
- Visual representation of your compose stack
- Easy log viewing for all services
- Quick start/stop controls
- Built-in resource monitoring

## Common Use Cases

- **Web Applications**: Frontend, backend, and database
- **Microservices**: Multiple interconnected services
- **Development Environments**: Consistent dev setups
- **Testing**: Isolated test environments
"#,
    code_example: Some(CodeExample {
        title: "Sample Docker Compose File",
        description: "A complete web application stack",
        code: r#"# docker-compose.yml
version: '3.8'

services:
  web:
    build: .
    ports:
      - "3000:3000"
    environment:
      - NODE_ENV=development
    depends_on:
      - database
    volumes:
      - .:/app
      - /app/node_modules

  database:
    image: postgres:13
    environment:
      POSTGRES_DB: myapp
      POSTGRES_USER: user
      POSTGRES_PASSWORD: password
    volumes:
      - postgres_data:/var/lib/postgresql/data
    ports:
      - "5432:5432"

  redis:
    image: redis:6-alpine
    ports:
      - "6379:6379"

volumes:
  postgres_data:

# Run with: docker-compose up -d"#,
        language: "yaml",
    }),
};

const MODEL_RUNNER: ContentRecord = ContentRecord {
    title: "AI Model Runner in Docker Desktop",
    description: "Run AI models locally using Docker Desktop",
    duration: "30 min",
    difficulty: Difficulty::Intermediate,
    content: r#"Docker Desktop's Model Runner feature allows you to easily deploy and run AI models locally, providing a simple way to integrate machine learning into your applications.

## What is Model Runner?

Model Runner is a Docker Desktop feature that simplifies running AI/ML models in containers. It provides pre-configured environments for popular machine learning frameworks and models.

## Key Features

### Pre-built Images
Access optimized Docker images with popular ML frameworks like TensorFlow, PyTorch, and scikit-learn.

### GPU Support
Leverage GPU acceleration for faster model inference and training.

### Model Versioning
Manage different versions of your models with ease.

### API Integration
Expose models as REST APIs for easy integration with applications.

## Supported Frameworks

Model Runner supports various AI/ML frameworks:
- **TensorFlow**: Deep learning and neural networks
- **PyTorch**: Dynamic neural networks and research
- **scikit-learn**: Traditional machine learning algorithms
- **Hugging Face**: Natural language processing models
- **ONNX**: Cross-platform model format

## Getting Started

### Step 1: Enable Model Runner
Access Model Runner through Docker Desktop's extensions marketplace.

### Step 2: Choose a Model
Browse available models or import your own trained models.

### Step 3: Configure Resources
Set appropriate CPU, memory, and GPU allocations.

### Step 4: Deploy and Test
Start your model container and test with sample data.

## Use Cases

- **Local Development**: Test ML models without cloud dependencies
- **Prototyping**: Quickly experiment with different models
- **Production**: Deploy models in containerized environments
- **Edge Computing**: Run models on edge devices
"#,
    code_example: Some(CodeExample {
        title: "Running a TensorFlow Model",
        description: "Deploy a pre-trained model with Model Runner",
        code: r#"# Pull TensorFlow Serving image
docker pull tensorflow/serving

# Run a model server
docker run -d --name tf-serving \
  -p 8501:8501 \
  -v /path/to/model:/models/my_model \
  -e MODEL_NAME=my_model \
  tensorflow/serving

# Test the model API
curl -d '{"instances": [1.0, 2.0, 5.0]}' \
  -X POST http://localhost:8501/v1/models/my_model:predict

# View running models
docker ps

# Check model logs
docker logs tf-serving"#,
        language: "bash",
    }),
};

const MCP_TOOLKIT: ContentRecord = ContentRecord {
    title: "Docker MCP Toolkit",
    description: "Model Context Protocol integration with Docker",
    duration: "25 min",
    difficulty: Difficulty::Advanced,
    content: r#"The Docker MCP (Model Context Protocol) Toolkit provides seamless integration between AI models and containerized applications, enabling sophisticated AI workflows within Docker Desktop.

## Understanding MCP

Model Context Protocol (MCP) is a standardized way for AI models to interact with external tools and data sources. The Docker MCP Toolkit brings this capability to containerized environments.

## Key Components

### Context Providers
Services that supply context and data to AI models running in containers.

### Tool Integration
Connect models with external tools and APIs for enhanced capabilities.

### Session Management
Maintain conversation context across multiple container interactions.

### Security Layer
Secure communication between models and external resources.

## Docker Desktop Integration

The MCP Toolkit integrates deeply with Docker Desktop:
- **Visual Management**: Monitor MCP sessions through the GUI
- **Resource Allocation**: Optimize resources for AI workloads
- **Extension Support**: Enhance functionality with community extensions
- **Logging**: Comprehensive logging of model interactions

## Setting Up MCP Toolkit

### Installation
Install the MCP Toolkit extension from Docker Desktop's marketplace.

### Configuration
Configure context providers and tool integrations.

### Model Setup
Deploy MCP-compatible models using provided templates.

### Testing
Verify the setup with sample interactions.

## Use Cases

### Intelligent Automation
Create containers that can make decisions based on real-time data.

### Development Assistance
AI-powered code analysis and generation within development containers.

### Data Processing
Intelligent data transformation and analysis workflows.

### Customer Support
AI chatbots with access to containerized knowledge bases.
"#,
    code_example: Some(CodeExample {
        title: "MCP Toolkit Configuration",
        description: "Basic setup for Model Context Protocol",
        code: r#"# docker-compose.yml for MCP setup
version: '3.8'

services:
  mcp-server:
    image: docker/mcp-toolkit:latest
    ports:
      - "8080:8080"
    environment:
      - MCP_CONFIG_PATH=/config/mcp.yml
    volumes:
      - ./config:/config
      - ./models:/models
    
  context-provider:
    image: docker/mcp-context:latest
    ports:
      - "8081:8081"
    environment:
      - PROVIDER_TYPE=database
      - DB_CONNECTION=postgresql://user:pass@db:5432/context
    depends_on:
      - database

  ai-model:
    image: docker/mcp-model:latest
    environment:
      - MODEL_TYPE=llama2
      - MCP_SERVER_URL=http://mcp-server:8080
    volumes:
      - ./models:/app/models

# Start the MCP stack
# docker-compose up -d"#,
        language: "yaml",
    }),
};

const DOCKER_EXTENSIONS: ContentRecord = ContentRecord {
    title: "Docker Extensions Ecosystem",
    description: "Extend Docker Desktop functionality with powerful extensions",
    duration: "20 min",
    difficulty: Difficulty::Intermediate,
    content: r#"Docker Extensions transform Docker Desktop into a comprehensive development platform by adding specialized tools and integrations directly into the interface.

## What are Docker Extensions?

Docker Extensions are third-party tools that integrate seamlessly with Docker Desktop, providing additional functionality without leaving the Docker environment.

## Popular Extension Categories

### Development Tools
Extensions that enhance the development workflow:
- **Code Editors**: Integrated development environments
- **Database Tools**: GUI clients for various databases
- **API Testing**: Tools like Postman or Insomnia
- **Monitoring**: Real-time container and application monitoring

### DevOps and CI/CD
Streamline deployment and operations:
- **Kubernetes**: Manage K8s clusters and deployments
- **Registry Management**: Private registry administration
- **Security Scanning**: Vulnerability assessment tools
- **Backup Solutions**: Container and volume backup utilities

### Observability
Monitor and debug applications:
- **Log Aggregation**: Centralized logging solutions
- **Metrics Collection**: Performance monitoring dashboards
- **Tracing**: Distributed tracing for microservices
- **Alerting**: Notification and alerting systems

## Installing Extensions

### From the Marketplace
1. Open Docker Desktop
2. Navigate to the Extensions tab
3. Browse available extensions
4. Click "Install" on desired extensions

### From Command Line
Use the Docker CLI to manage extensions programmatically.

## Managing Extensions

### Enable/Disable
Toggle extensions on or off without uninstalling.

### Configuration
Most extensions provide configuration options within Docker Desktop.

### Updates
Keep extensions updated through the marketplace or CLI.

## Building Custom Extensions

Create your own extensions using the Docker Extensions SDK:
- **Web-based UI**: Build interfaces with HTML, CSS, and JavaScript
- **Backend Integration**: Connect to external services and APIs
- **Docker API Access**: Interact with Docker daemon directly
"#,
    code_example: Some(CodeExample {
        title: "Managing Docker Extensions",
        description: "Command-line extension management",
        code: r#"# List installed extensions
docker extension list

# Install an extension
docker extension install docker/logs-explorer-extension

# Install from marketplace
docker extension install portainer/portainer-docker-extension

# Update all extensions
docker extension update

# Remove an extension
docker extension remove docker/logs-explorer-extension

# Enable/disable extension
docker extension enable docker/logs-explorer-extension
docker extension disable docker/logs-explorer-extension

# View extension details
docker extension inspect docker/logs-explorer-extension"#,
        language: "bash",
    }),
};

const DOCKER_MODEL_RUNNER: ContentRecord = ContentRecord {
    title: "Docker Model Runner",
    description: "Run Large Language Models locally with Docker Desktop",
    duration: "45 min",
    difficulty: Difficulty::Intermediate,
    content: r#"Docker Model Runner is an experimental feature in Docker Desktop 4.40+ that provides a Docker-native experience for running Large Language Models (LLMs) locally. It seamlessly integrates with existing container tooling and workflows, offering GPU-accelerated inference engines accessible through both Docker socket and TCP connections.

## What's Docker Model Runner All About?

Docker Model Runner provides inference capabilities directly on your laptop, allowing you to run LLM models locally without relying on external APIs. This is crucial for developing GenAI applications with enhanced privacy and reduced latency.

### Key Benefits

- **Native Docker Integration**: AI models are treated as first-class citizens in Docker CLI
- **GPU Acceleration**: Direct access to hardware GPU acceleration on Apple Silicon
- **Local Inference**: Your data never leaves your infrastructure
- **OCI Artifacts**: Models stored as standardized artifacts in Docker Hub
- **No Containerization Overhead**: Models run directly on host for better performance

## Native Docker Integration through docker model CLI

Docker Desktop 4.40+ introduces the docker model CLI as a first-class citizen. This means AI models are now fundamental, well-supported objects within Docker CLI, similar to containers, images, and volumes.

### CLI Capabilities

- Pull models from registries (Docker Hub)
- Run models locally with GPU acceleration
- Integrate models into development workflows
- Test GenAI applications without external APIs

## How Model Runner Works

Unlike traditional Docker containers, AI models DO NOT run in containers with Model Runner. Instead, Docker uses a host-installed inference server (llama.cpp) that runs natively on your machine.

### Architecture

1. **Host-level Process**: Docker Desktop runs llama.cpp directly on your host machine
2. **GPU Acceleration**: Direct access to Apple's Metal API for GPU acceleration
3. **Model Loading**: Models downloaded from Docker Hub are cached locally and dynamically loaded

### Advantages of OCI Artifacts

- **No Compression**: Model weights are largely uncompressible, so no compression overhead
- **Faster Deployments**: No need for both compressed and uncompressed versions
- **Lower Disk Requirements**: More efficient storage usage
- **Standardized Format**: Works with any Docker Registry

## Who's This For?

- **Application Developers**: Building GenAI applications with local testing capabilities
- **Data Scientists**: Need simple ways to run models locally with GPU acceleration
- **Mac Users**: Apple Silicon (M1/M2/M3/M4) users wanting to leverage GPU capabilities
- **Privacy-Conscious Teams**: Those requiring local AI workflows without external data sharing
- **Prototype Developers**: Teams needing quick iteration cycles without cloud deployments

## Getting Started

### Prerequisites

- Docker Desktop 4.40+
- Apple Silicon Mac (M-series) - Windows support available
- "Docker Model Runner" enabled in settings

### Enable Model Runner

**Using CLI:**
docker desktop enable model-runner

**Using Docker Dashboard:**
Navigate to Settings → Features → Enable "Docker Model Runner"

### Check Status

docker model status
Output: Docker Model Runner is running

## Working with Models

### Available Commands

- docker model pull - Download a model
- docker model list - List available models
- docker model run - Run a model
- docker model rm - Remove a model
- docker model inspect - Display model details
- docker model version - Show version information

### Download and Run Models

Models are available from Docker Hub under the ai/ namespace:
- ai/llama3.2
- ai/gemma3
- ai/mistral
- ai/phi4
- ai/qwen2.5
- ai/deepseek-r1-distill-llama

## Connection Methods

### 1. From Within Containers
http://model-runner.docker.internal/

### 2. From Host via Docker Socket
Access via the Docker socket for internal communication

### 3. From Host via TCP
When TCP host support is enabled (default port 12434)

## OpenAI API Compatibility

Model Runner implements OpenAI-compatible endpoints:
- GET /engines/{backend}/v1/models
- GET /engines/{backend}/v1/models/{namespace}/{name}
- POST /engines/{backend}/v1/chat/completions
- POST /engines/{backend}/v1/completions
- POST /engines/{backend}/v1/embeddings

## Latest Updates (June 2025)

- Available on x86 Windows machines with NVIDIA GPUs
- Windows support for Qualcomm/ARM GPUs
- Real-time logs tab in Models view
- Push models to Docker Hub capability
- Docker Compose and Testcontainers support
- Streaming and tool calling support in llama.cpp server
- Docker CE compatibility

## Use Cases

- **Local GenAI Development**: Build applications without external API dependencies
- **Privacy-First AI**: Keep sensitive data within your infrastructure
- **Rapid Prototyping**: Quick iteration cycles for AI-powered features
- **Edge Computing**: Deploy AI capabilities on edge devices
- **Development Testing**: Test AI integrations before cloud deployment
"#,
    code_example: Some(CodeExample {
        title: "Complete Model Runner Workflow",
        description: "Download, run, and interact with an LLM using Model Runner",
        code: r#"# Check if Model Runner is active
docker model status

# List available models (initially empty)
docker model ls

# Download a model from Docker Hub
docker model pull ai/llama3.2:1B-Q8_0

# Verify the model is downloaded
docker model ls
# MODEL                PARAMETERS  QUANTIZATION  ARCHITECTURE  MODEL ID      CREATED       SIZE
# ai/llama3.2:1B-Q8_0  1.24 B      Q8_0          llama         a15c3117eeeb  20 hours ago  1.22 GiB

# Send a single message to the model
docker model run ai/llama3.2:1B-Q8_0 "Explain Docker in simple terms"

# Start interactive chat mode
docker model run ai/llama3.2:1B-Q8_0
# Interactive chat mode started. Type '/bye' to exit.
# > What are the benefits of containerization?

# Access via Docker socket (from host)
curl --unix-socket /var/run/docker.sock \
    localhost/exp/vDD4.40/engines/llama.cpp/v1/chat/completions \
    -H "Content-Type: application/json" \
    -d '{
      "model": "ai/llama3.2:1B-Q8_0",
      "messages": [
        {"role": "user", "content": "Hello from Docker socket!"}
      ]
    }'

# Enable TCP support for external access
docker desktop enable model-runner --tcp 12434

# Test TCP connection
curl -X POST http://localhost:12434/engines/llama.cpp/v1/chat/completions \
    -H "Content-Type: application/json" \
    -d '{
      "model": "ai/llama3.2:1B-Q8_0",
      "messages": [
        {"role": "user", "content": "Hello via TCP!"}
      ]
    }'

# Clean up - remove the model
docker model rm ai/llama3.2:1B-Q8_0

# Check logs (macOS)
tail -f ~/Library/Containers/com.docker.docker/Data/log/host/inference-llama.cpp.log"#,
        language: "bash",
    }),
};
